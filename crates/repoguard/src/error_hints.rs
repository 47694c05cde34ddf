use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("failed to run interpreter") {
        push_hint(
            &mut out,
            "Install the interpreter or point at it with `--interpreter <CMD>`.",
        );
        push_hint(
            &mut out,
            "In CI you can skip probing with `--found <MAJOR.MINOR>`.",
        );
    }

    if haystack.contains("no version number found") {
        push_hint(
            &mut out,
            "Check that `<interpreter> --version` prints a MAJOR.MINOR version.",
        );
    }

    if haystack.contains("failed to read commit message") {
        push_hint(
            &mut out,
            "Pass the file git hands to the hook, e.g. `repoguard commit-msg .git/COMMIT_EDITMSG`.",
        );
    }

    if haystack.contains("not inside a git repository") {
        push_hint(
            &mut out,
            "Run the command from a git repository or pass `--repo-root <PATH>`.",
        );
        push_hint(&mut out, "Initialize git first if needed: `git init`.");
    }

    if haystack.contains("already exists") && haystack.contains("--force") {
        push_hint(
            &mut out,
            "Use `repoguard install-hook --print` to merge the hook into your existing one.",
        );
    }

    if haystack.contains("task id prefix") {
        push_hint(
            &mut out,
            "Prefixes in `[tasks] prefixes` must be uppercase letters, e.g. [\"T\", \"TX\", \"D\", \"Q\"].",
        );
    }

    if haystack.contains("toml") && (haystack.contains("parse") || haystack.contains("invalid")) {
        push_hint(&mut out, "Check `repoguard.toml` syntax and key names.");
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
