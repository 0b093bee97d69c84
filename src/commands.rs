//! CLI Command Handlers
//!
//! Each handler takes CLI args, a backend client and Output, and returns
//! an ExitCode.

use serde::Serialize;

use cineplex::api::{MovieApiClient, MovieApiError};
use cineplex::models::{Movie, Recommendation};

use crate::cli::{ExitCode, HealthCmd, MovieCmd, Output};

/// Exit code for a failed backend call
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<MovieApiError>() {
        Some(MovieApiError::NotFound(_)) => ExitCode::NotFound,
        Some(MovieApiError::RequestFailed(_)) => ExitCode::NetworkError,
        _ => ExitCode::Error,
    }
}

// =============================================================================
// Movie Command
// =============================================================================

#[derive(Debug, Serialize)]
struct MovieReport<'a> {
    movie: &'a Movie,
    recommendations: &'a [Recommendation],
}

pub async fn movie_cmd(cmd: MovieCmd, client: &MovieApiClient, output: &Output) -> ExitCode {
    let Some(title) = cmd.trimmed_title() else {
        return output.error("Movie title must not be empty", ExitCode::InvalidArgs);
    };

    output.info(format!("Looking up: {}", title));

    match client.fetch_movie(title).await {
        Ok(mut response) => {
            if let Some(limit) = cmd.limit {
                response.recommendations.truncate(limit);
            }

            if output.json {
                let report = MovieReport {
                    movie: &response.movie,
                    recommendations: &response.recommendations,
                };
                if let Err(e) = output.print_json(report) {
                    return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
                }
                return ExitCode::Success;
            }

            print_movie(&response.movie, output);
            if response.recommendations.is_empty() {
                output.info("No recommendations.");
            } else {
                output.line("");
                output.line("Recommended:");
                for (i, rec) in response.recommendations.iter().enumerate() {
                    output.line(format!("  {:>2}. {}", i + 1, rec));
                }
            }
            ExitCode::Success
        }
        Err(e) => {
            let code = exit_code_for(&e);
            output.error(e.to_string(), code)
        }
    }
}

fn print_movie(movie: &Movie, output: &Output) {
    output.line(movie);
    if !movie.genres.is_empty() {
        output.line(movie.genres_label());
    }
    if !movie.overview.is_empty() {
        output.line("");
        output.line(&movie.overview);
    }
    if !movie.cast.is_empty() {
        let names: Vec<&str> = movie.cast.iter().take(5).map(|c| c.name.as_str()).collect();
        output.line(format!("Cast: {}", names.join(", ")));
    }
    if let Some(url) = &movie.trailer_url {
        output.line(format!("Trailer: {}", url));
    }
    if let Some(url) = &movie.watch_url {
        output.line(format!("Watch: {}", url));
    }
}

// =============================================================================
// Health Command
// =============================================================================

pub async fn health_cmd(_cmd: HealthCmd, client: &MovieApiClient, output: &Output) -> ExitCode {
    output.info(format!("Checking {}", client.base_url()));

    match client.health().await {
        Ok(health) => {
            if output.json {
                if let Err(e) = output.print_json(&health) {
                    return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
                }
            } else {
                output.line(&health);
            }
            ExitCode::Success
        }
        Err(e) => {
            let code = exit_code_for(&e);
            output.error(format!("Health check failed: {}", e), code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        let not_found = anyhow::Error::new(MovieApiError::NotFound("Movie not found".into()));
        assert_eq!(exit_code_for(&not_found), ExitCode::NotFound);

        let server = anyhow::Error::new(MovieApiError::Server {
            status: 500,
            message: "boom".into(),
        });
        assert_eq!(exit_code_for(&server), ExitCode::Error);

        let other = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&other), ExitCode::Error);
    }

    #[tokio::test]
    async fn test_blank_title_is_invalid() {
        let output = Output {
            json: false,
            quiet: true,
        };
        let cmd = MovieCmd {
            title: "  ".into(),
            limit: None,
        };
        let code = movie_cmd(cmd, &MovieApiClient::new(), &output).await;
        assert_eq!(code, ExitCode::InvalidArgs);
    }
}
