//! Output formatting for repository listings.

use std::io::{self, Write};

use fetch_all_repos::{FetchError, RepositoryRecord};

/// Writes one repository per line, using `full_name` and falling back to
/// `name`.
///
/// # Errors
///
/// Returns [`FetchError::Io`] when the writer fails.
pub fn write_repository_names<W: Write>(
    writer: &mut W,
    repositories: &[RepositoryRecord],
) -> Result<(), FetchError> {
    for repository in repositories {
        let label = repository
            .full_name()
            .or_else(|| repository.name())
            .unwrap_or("(unnamed repository)");
        writeln!(writer, "{label}").map_err(|error| io_error(&error))?;
    }
    Ok(())
}

/// Writes the raw repository records as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`FetchError::Io`] when serialization or the writer fails.
pub fn write_repository_json<W: Write>(
    writer: &mut W,
    repositories: &[RepositoryRecord],
) -> Result<(), FetchError> {
    serde_json::to_writer_pretty(&mut *writer, repositories).map_err(|error| FetchError::Io {
        message: error.to_string(),
    })?;
    writeln!(writer).map_err(|error| io_error(&error))
}

fn io_error(error: &io::Error) -> FetchError {
    FetchError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use fetch_all_repos::RepositoryRecord;
    use serde_json::json;

    use super::{write_repository_json, write_repository_names};

    fn records() -> Vec<RepositoryRecord> {
        vec![
            RepositoryRecord::from_value(json!({ "name": "demo", "full_name": "octo/demo" })),
            RepositoryRecord::from_value(json!({ "name": "bare" })),
            RepositoryRecord::from_value(json!({ "private": true })),
        ]
    }

    #[test]
    fn names_prefer_full_name() {
        let mut buffer = Vec::new();
        write_repository_names(&mut buffer, &records()).expect("write should succeed");

        let output = String::from_utf8(buffer).expect("output should be UTF-8");
        assert_eq!(output, "octo/demo\nbare\n(unnamed repository)\n");
    }

    #[test]
    fn json_round_trips_the_records() {
        let mut buffer = Vec::new();
        write_repository_json(&mut buffer, &records()).expect("write should succeed");

        let parsed: serde_json::Value =
            serde_json::from_slice(&buffer).expect("output should be JSON");
        assert_eq!(
            parsed,
            json!([
                { "name": "demo", "full_name": "octo/demo" },
                { "name": "bare" },
                { "private": true }
            ])
        );
    }
}
