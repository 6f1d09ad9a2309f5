//! `treader version` output.

use std::env::consts::{ARCH, OS};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const GIT_COMMIT: Option<&str> = option_env!("TREADER_GIT_COMMIT");
const BUILD_TIME: Option<&str> = option_env!("TREADER_BUILD_TIME");

pub fn render() -> String {
    format!(
        "treader {VERSION}\ncommit: {}\nbuilt: {}\nplatform: {OS}/{ARCH}",
        GIT_COMMIT.unwrap_or("unknown"),
        BUILD_TIME.unwrap_or("unknown"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_build_fields() {
        let text = render();
        assert!(text.starts_with(&format!("treader {VERSION}\n")));
        assert!(text.contains("commit: "));
        assert!(text.contains("built: "));
        assert!(text.ends_with(&format!("platform: {OS}/{ARCH}")));
    }
}
