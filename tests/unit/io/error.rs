//! Tests for error construction and formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;

    use percolation::PercolationError;
    use percolation::io::error::{computation_error, file_system_error, invalid_parameter};

    #[test]
    fn test_invalid_parameter_message() {
        let error = invalid_parameter("rows", &0, &"must be positive");

        assert_eq!(
            error.to_string(),
            "Invalid parameter 'rows' = '0': must be positive"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn test_computation_error_message() {
        let error = computation_error("mass windowing", &"no cluster");

        assert_eq!(
            error.to_string(),
            "Computation error in mass windowing: no cluster"
        );
    }

    #[test]
    fn test_file_system_error_keeps_source() {
        let error = file_system_error(
            "data/out.dat",
            "create file",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        let message = error.to_string();
        assert!(message.contains("create file"));
        assert!(message.contains("data/out.dat"));
        assert!(message.contains("denied"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let error: PercolationError = io::Error::new(io::ErrorKind::NotFound, "gone").into();

        assert!(matches!(error, PercolationError::FileSystem { .. }));
    }
}
