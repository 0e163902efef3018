// tests/core_stays_headless.rs
// Fails if the calculation core picks up presentation or timing dependencies,
// or if runtime code unwraps instead of propagating errors.

use std::fs;
use std::path::{Path, PathBuf};

const CORE_FILES: [&str; 4] = ["calculator.rs", "definitions.rs", "error.rs", "numerals.rs"];

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for e in entries.flatten() {
            let p = e.path();
            if p.is_dir() {
                collect_rs_files(&p, files);
            } else if p.extension().map(|s| s == "rs").unwrap_or(false) {
                files.push(p);
            }
        }
    }
}

/// Source text before the first `#[cfg(test)]` block.
fn runtime_part(content: &str) -> &str {
    match content.find("#[cfg(test)]") {
        Some(idx) => &content[..idx],
        None => content,
    }
}

#[test]
fn core_has_no_ui_or_timer_dependencies() {
    let core_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("cross");
    let forbidden = ["bevy_egui", "egui::", "tokio", "std::time", "std::thread", "Res<", "ResMut<"];

    let mut offenders = Vec::new();
    for name in CORE_FILES {
        let path = core_dir.join(name);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("core file {} missing: {}", path.display(), e));
        for pattern in forbidden {
            if runtime_part(&content).contains(pattern) {
                offenders.push(format!("{} uses {}", name, pattern));
            }
        }
    }

    assert!(offenders.is_empty(), "Calculation core must stay pure:\n{}", offenders.join("\n"));
}

#[test]
fn runtime_code_does_not_unwrap() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut files = Vec::new();
    collect_rs_files(&src_dir, &mut files);

    let mut offenders = Vec::new();
    for file in files {
        let Ok(content) = fs::read_to_string(&file) else {
            continue;
        };
        for (i, line) in runtime_part(&content).lines().enumerate() {
            if line.contains(".unwrap()") || line.contains(".expect(") {
                offenders.push(format!("{}:{}: {}", file.display(), i + 1, line.trim()));
            }
        }
    }

    assert!(offenders.is_empty(), "Propagate errors instead:\n{}", offenders.join("\n"));
}
