use semver::Version;

pub fn get_version() -> String {
    let semver = env!("CARGO_PKG_VERSION").parse::<Version>();

    let Ok(semver) = semver else {
        tracing::warn!("couldn't parse a semver out of Cargo.toml? defaulting to 0.0.0-unknown.");
        return String::from("0.0.0-unknown");
    };

    // vergen writes this placeholder when it cannot reach git, e.g. in CI
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "VERGEN_IDEMPOTENT_OUTPUT" && !sha.is_empty() => {
            format!("{semver} ({sha})")
        }
        _ => semver.to_string(),
    }
}
