use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_file_exists, Settings};

pub fn run(
    api_url: Option<String>,
    token: Option<String>,
    data_dir: Option<String>,
) -> Result<()> {
    let mut settings = if settings_file_exists() {
        load_settings()
    } else {
        Settings::default()
    };

    if let Some(url) = api_url {
        settings.api_url = url;
    }
    if let Some(token) = token {
        settings.api_token = token;
    }
    if let Some(dir) = data_dir {
        settings.data_dir = dir;
    }

    save_settings(&settings)?;

    println!("Settings saved.");
    println!(
        "API URL:  {}",
        if settings.api_url.is_empty() {
            "(not set)"
        } else {
            &settings.api_url
        }
    );
    println!(
        "Token:    {}",
        if settings.api_token.is_empty() {
            "(not set)"
        } else {
            "(set)"
        }
    );
    println!("Data dir: {}", settings.data_dir);
    Ok(())
}
