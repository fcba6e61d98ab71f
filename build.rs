// Build script: the API base URL is baked in via option_env!, so a change
// to API_BASE_URL must trigger a rebuild.

fn main() {
    println!("cargo:rerun-if-env-changed=API_BASE_URL");

    if let Ok(url) = std::env::var("API_BASE_URL") {
        if !url.starts_with("http://") && !url.starts_with("https://") && !url.is_empty() {
            println!(
                "cargo:warning=API_BASE_URL '{}' has no http(s) scheme; requests will be relative",
                url
            );
        }
    }
}
