fn git(args: &[&str]) -> Option<String> {
    let output = std::process::Command::new("git").args(args).output().ok()?;
    std::str::from_utf8(&output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn main() {
    // Rebuild when the checked-out commit changes so the version string stays honest.
    if let Some(git_dir) = git(&["rev-parse", "--git-dir"]) {
        let git_path = std::path::Path::new(&git_dir);
        for entry in ["HEAD", "packed-refs", "refs/heads", "refs/tags"] {
            if git_path.join(entry).exists() {
                println!("cargo:rerun-if-changed={git_dir}/{entry}");
            }
        }
    }

    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_info = match git(&["describe", "--always", "--tags", "--long", "--dirty"]) {
        Some(describe) if describe.contains(pkg_version) => describe,
        Some(describe) => format!("v{pkg_version}-{describe}"),
        None => format!("v{pkg_version}"),
    };
    println!("cargo:rustc-env=_GIT_INFO={git_info}");
}
