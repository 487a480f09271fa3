// moo-core/src/caveats.rs

const CAVEATS: &str = r#"Moo Statusline has been installed to ~/.claude/statusline.sh

To activate, add to your ~/.claude/settings.json:

  {
    "statusLine": {
      "type": "command",
      "command": "bash ~/.claude/statusline.sh"
    }
  }

Then restart Claude Code.

Requirements:
  - jq (installed as dependency)
  - git (for branch display)
  - Active Claude Code login (for API access)
"#;

/// Post-install activation instructions.
pub fn render_caveats() -> &'static str {
    CAVEATS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caveats_are_stable_and_mention_settings() {
        assert_eq!(render_caveats(), render_caveats());
        assert!(render_caveats().contains("~/.claude/settings.json"));
        assert!(render_caveats().contains("bash ~/.claude/statusline.sh"));
        assert!(render_caveats().contains("jq"));
    }
}
