use std::env;
use std::fs;
use std::path::Path;

/// Keys forwarded from `.env` into `option_env!` at compile time
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL",
    "API_PREFIX",
    "TOKEN_COOKIE_NAME",
    "ENABLE_LOGGING",
];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE, surrounding quotes stripped
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !CONFIG_KEYS.contains(&key) {
                        println!("cargo:warning=Ignoring unknown .env key {}", key);
                        continue;
                    }

                    // The real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default values (backend at http://localhost:8000).");
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
