use std::env;
use std::fs;
use std::path::Path;

/// Variables que el cliente lee con option_env! (ver src/config.rs)
const CLIENT_KEYS: &[&str] = &[
    "BACKEND_URL",
    "SESSION_ID",
    "POLL_INTERVAL_MS",
    "LANGUAGE",
    "ENABLE_LOGGING",
];

fn main() {
    for key in CLIENT_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!(
            "cargo:warning=No .env file found, using defaults (same-origin, session 'default')."
        );
        println!("cargo:rerun-if-changed=build.rs");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    if let Ok(contents) = fs::read_to_string(env_file) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            if !CLIENT_KEYS.contains(&key) {
                println!("cargo:warning=Ignoring unknown .env key {}", key);
                continue;
            }
            // El entorno del proceso tiene prioridad sobre .env
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
}
