use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use tokio::fs;
use tracing::Level;
use url::Url;

use crate::utilities::{errors::AppError, i18n::Locale};

#[derive(Clone, Debug)]
pub struct Config {
    pub server_address: String,
    pub frontend_endpoint: String,

    pub base_dir: PathBuf,
    pub tracing_level: Level,

    // FORM INTAKE
    pub form_intake_endpoint: Url,
    pub form_intake_access_key: String,
    pub form_intake_timeout_seconds: u64,

    // CONTACT LINKS
    pub whatsapp_number: String,

    // I18N
    pub default_locale: Locale,
}

impl Config {
    pub async fn init() -> Result<Self, AppError> {
        // Optional in deployments.
        dotenvy::dotenv().ok();

        let base_dir = find_project_root().unwrap_or_else(|| PathBuf::from("."));

        let server_address = get_config_value(
            "SERVER_ADDRESS",
            Some("SERVER_ADDRESS"),
            None,
            Some("0.0.0.0:8001".to_string()),
        )
        .await?
        .ok_or_else(|| AppError::EnvironmentVariableNotSetError("SERVER_ADDRESS".to_string()))?;

        let frontend_endpoint = get_config_value(
            "FRONTEND_ENDPOINT",
            Some("FRONTEND_ENDPOINT"),
            None,
            Some("http://localhost:3000".to_string()),
        )
        .await?
        .ok_or_else(|| {
            AppError::EnvironmentVariableNotSetError("FRONTEND_ENDPOINT".to_string())
        })?;

        let tracing_level = get_config_value(
            "TRACING_LEVEL",
            Some("TRACING_LEVEL"),
            None,
            Some(Level::INFO),
        )
        .await?
        .ok_or_else(|| AppError::EnvironmentVariableNotSetError("TRACING_LEVEL".to_string()))?;

        let form_intake_endpoint = get_config_value(
            "FORM_INTAKE_ENDPOINT",
            Some("FORM_INTAKE_ENDPOINT"),
            None,
            Some(Url::parse("https://api.web3forms.com/submit")?),
        )
        .await?
        .ok_or_else(|| {
            AppError::EnvironmentVariableNotSetError("FORM_INTAKE_ENDPOINT".to_string())
        })?;

        // Docker secret → env → certs/ fallback file
        let access_key_path = base_dir.join("certs/form-intake-access-key");
        let form_intake_access_key = get_config_value(
            "form_intake_access_key",
            Some("FORM_INTAKE_ACCESS_KEY"),
            Some(&access_key_path),
            None,
        )
        .await?
        .ok_or_else(|| {
            AppError::EnvironmentVariableNotSetError("FORM_INTAKE_ACCESS_KEY".to_string())
        })?;

        let form_intake_timeout_seconds = get_config_value(
            "FORM_INTAKE_TIMEOUT_SECONDS",
            Some("FORM_INTAKE_TIMEOUT_SECONDS"),
            None,
            Some(10),
        )
        .await?
        .ok_or_else(|| {
            AppError::EnvironmentVariableNotSetError("FORM_INTAKE_TIMEOUT_SECONDS".to_string())
        })?;

        let whatsapp_number = get_config_value(
            "WHATSAPP_NUMBER",
            Some("WHATSAPP_NUMBER"),
            None,
            Some("1234567890".to_string()),
        )
        .await?
        .ok_or_else(|| AppError::EnvironmentVariableNotSetError("WHATSAPP_NUMBER".to_string()))?;

        let default_locale = get_config_value(
            "DEFAULT_LOCALE",
            Some("DEFAULT_LOCALE"),
            None,
            Some(Locale::FALLBACK),
        )
        .await?
        .unwrap_or(Locale::FALLBACK);

        let config = Config {
            server_address,
            frontend_endpoint,
            base_dir,
            tracing_level,
            form_intake_endpoint,
            form_intake_access_key,
            form_intake_timeout_seconds,
            whatsapp_number,
            default_locale,
        };

        Ok(config)
    }
}

fn find_project_root() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        if dir.join("Cargo.toml").exists() {
            return Some(dir);
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Try to resolve config value from Docker secrets, env var, or a fallback file.
/// - `secret_name` → filename inside `/run/secrets/`
/// - `env_name` → optional environment variable key
/// - `fallback_path` → fallback file path (checked if exists)
///
/// Returns the first value that parses as `T`, else `fallback`.
pub async fn get_config_value<T>(
    secret_name: &str,
    env_name: Option<&str>,
    fallback_path: Option<&PathBuf>,
    fallback: Option<T>,
) -> Result<Option<T>, AppError>
where
    T: FromStr,
{
    // 1. Docker secrets
    let docker_secret = Path::new("/run/secrets").join(secret_name);
    if docker_secret.exists() {
        match fs::read_to_string(&docker_secret).await {
            Ok(content) => {
                if let Ok(parsed) = T::from_str(content.trim()) {
                    return Ok(Some(parsed));
                }
            }
            Err(e) => {
                return Err(AppError::FileReadError(format!(
                    "Failed to read docker secret at {0}, {e}",
                    docker_secret.display()
                )));
            }
        }
    }

    // 2. Env var
    if let Some(env_key) = env_name
        && let Ok(val) = std::env::var(env_key)
        && let Ok(parsed) = T::from_str(val.trim())
    {
        return Ok(Some(parsed));
    }

    // 3. Fallback file path
    if let Some(path) = fallback_path
        && path.exists()
    {
        match fs::read_to_string(path).await {
            Ok(content) => {
                if let Ok(parsed) = T::from_str(content.trim()) {
                    return Ok(Some(parsed));
                }
            }
            Err(e) => {
                return Err(AppError::FileReadError(format!(
                    "Failed to read fallback file at {}, {}",
                    path.display(),
                    e
                )));
            }
        }
    }

    // 4. Final fallback
    Ok(fallback)
}
