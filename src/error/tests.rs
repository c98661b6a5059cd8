//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod fpl_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Create a real HTTP error by making a request to an invalid URL
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let fpl_error = FplError::from(reqwest_error);

        match fpl_error {
            FplError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
        assert!(fpl_error.is_upstream());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let fpl_error = FplError::from(json_error);

        match fpl_error {
            FplError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
        assert!(fpl_error.is_upstream());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let fpl_error = FplError::from(io_error);

        match fpl_error {
            FplError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
        assert!(!fpl_error.is_upstream());
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let fpl_error = FplError::from(header_error);

        match fpl_error {
            FplError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let fpl_error = FplError::from(parse_error);

        match fpl_error {
            FplError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_missing_league_id_error() {
        let error = FplError::MissingLeagueId {
            env_var: "FPL_LEAGUE_ID".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("League ID not provided"));
        assert!(error_string.contains("FPL_LEAGUE_ID"));
    }

    #[test]
    fn test_malformed_error() {
        let error = FplError::Malformed {
            endpoint: "bootstrap-static".to_string(),
            detail: "no players".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Malformed response from bootstrap-static: no players"
        );
        assert!(error.is_upstream());
    }

    #[test]
    fn test_snapshot_error() {
        let error = FplError::Snapshot {
            message: "missing file".to_string(),
        };

        assert!(error.to_string().contains("Snapshot error"));
        assert!(!error.is_upstream());
    }

    #[test]
    fn test_invalid_position_error() {
        let error = FplError::InvalidPosition {
            position: "7".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Invalid position"));
        assert!(error_string.contains('7'));
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let fpl_error = FplError::from(io_error);

        let error_trait: &dyn std::error::Error = &fpl_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(FplError::Snapshot {
                message: "boom".to_string(),
            })
        }

        match test_function().unwrap_err() {
            FplError::Snapshot { message } => assert_eq!(message, "boom"),
            _ => panic!("Expected Snapshot error"),
        }
    }
}
