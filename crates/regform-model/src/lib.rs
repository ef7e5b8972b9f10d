pub mod error;
pub mod field;
pub mod values;

pub use error::ParseFieldNameError;
pub use field::FieldName;
pub use values::FormValues;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_serialize_with_control_names() {
        let mut values = FormValues::default();
        values.set(FieldName::Username, "User1");
        values.set(FieldName::ConfirmPassword, "Abcdef1!");

        let json = serde_json::to_string(&values).expect("serialize values");
        assert!(json.contains("\"username\":\"User1\""));
        assert!(json.contains("\"confirmPassword\":\"Abcdef1!\""));

        let round: FormValues = serde_json::from_str(&json).expect("deserialize values");
        assert_eq!(round, values);
    }
}
