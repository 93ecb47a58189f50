#[cfg(test)]
mod tests {
    use std::io::Write;
    use tempfile::NamedTempFile;
    use crate::config::models::OutputFormat;
    use crate::config::parser::{load_config, ConfigError};
    use crate::evaluation::Operation;

    // Helper function to create a temporary file with content
    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_valid_configuration() {
        let config_yaml = r#"
        output: json
        batches:
          - name: small_factorials
            operation: factorial
            inputs: [0, 5, 10]
          - name: balanced
            operation: is_balanced
            inputs: [123, 1221]
          - name: tens
            operation: divides
            divisor: 10
            inputs: [100, 101]
        "#;

        let temp_file = create_temp_file(config_yaml);
        let config = load_config(temp_file.path()).expect("Failed to load valid config");

        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.batches.len(), 3);

        assert_eq!(config.batches[0].name, "small_factorials");
        assert_eq!(config.batches[0].operation, Operation::Factorial);
        assert_eq!(config.batches[0].inputs, vec![0, 5, 10]);
        assert_eq!(config.batches[0].divisor, None);

        assert_eq!(config.batches[1].operation, Operation::IsBalanced);

        assert_eq!(config.batches[2].operation, Operation::Divides);
        assert_eq!(config.batches[2].divisor, Some(10));
    }

    #[test]
    fn test_minimal_valid_configuration() {
        let temp_file = create_temp_file("batches: []\n");
        let config = load_config(temp_file.path()).expect("Failed to load minimal config");

        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.batches.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let result = load_config("/nonexistent/numprops/config.yaml");
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_invalid_yaml() {
        let temp_file = create_temp_file("batches: [unclosed");
        let result = load_config(temp_file.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_unknown_operation() {
        let config_yaml = r#"
        batches:
          - name: bogus
            operation: is_prime
            inputs: [7]
        "#;

        let temp_file = create_temp_file(config_yaml);
        let result = load_config(temp_file.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_non_integer_input() {
        let config_yaml = r#"
        batches:
          - name: floats
            operation: is_even
            inputs: [2.5]
        "#;

        let temp_file = create_temp_file(config_yaml);
        let result = load_config(temp_file.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_empty_batch_name() {
        let config_yaml = r#"
        batches:
          - name: ""
            operation: is_even
            inputs: [2]
        "#;

        let temp_file = create_temp_file(config_yaml);
        let result = load_config(temp_file.path());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_empty_inputs() {
        let config_yaml = r#"
        batches:
          - name: nothing
            operation: is_even
            inputs: []
        "#;

        let temp_file = create_temp_file(config_yaml);
        let result = load_config(temp_file.path());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_duplicate_batch_names() {
        let config_yaml = r#"
        batches:
          - name: twice
            operation: is_even
            inputs: [2]
          - name: twice
            operation: is_odd
            inputs: [3]
        "#;

        let temp_file = create_temp_file(config_yaml);
        match load_config(temp_file.path()) {
            Err(ConfigError::Other(message)) => {
                assert!(message.contains("twice"));
                assert!(message.contains("more than once"));
            }
            other => panic!("Expected duplicate name error, got {:?}", other),
        }
    }

    #[test]
    fn test_divides_without_divisor() {
        let config_yaml = r#"
        batches:
          - name: no_divisor
            operation: divides
            inputs: [4]
        "#;

        let temp_file = create_temp_file(config_yaml);
        match load_config(temp_file.path()) {
            Err(ConfigError::Other(message)) => assert!(message.contains("no divisor")),
            other => panic!("Expected missing divisor error, got {:?}", other),
        }
    }

    #[test]
    fn test_divides_with_zero_divisor() {
        let config_yaml = r#"
        batches:
          - name: zero
            operation: divides
            divisor: 0
            inputs: [4]
        "#;

        let temp_file = create_temp_file(config_yaml);
        match load_config(temp_file.path()) {
            Err(ConfigError::Other(message)) => assert!(message.contains("zero divisor")),
            other => panic!("Expected zero divisor error, got {:?}", other),
        }
    }

    #[test]
    fn test_divisor_ignored_by_other_operations() {
        let config_yaml = r#"
        batches:
          - name: parity
            operation: is_even
            divisor: 0
            inputs: [4]
        "#;

        let temp_file = create_temp_file(config_yaml);
        assert!(load_config(temp_file.path()).is_ok());
    }
}
