use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());
    let bundle_dir = manifest_dir.join("assets").join("portraits");
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("bundle.rs");

    println!("cargo::rerun-if-changed=assets/portraits");

    let mut files = Vec::new();
    if bundle_dir.is_dir() {
        collect_files(&bundle_dir, &mut files);
    }
    files.sort();

    let mut out = String::from("&[\n");
    for path in &files {
        let key = bundle_key(&bundle_dir, path);
        out.push_str(&format!(
            "    ({:?}, include_bytes!({:?}) as &[u8]),\n",
            key,
            path.display().to_string()
        ));
    }
    out.push_str("]\n");

    fs::write(&out_path, out)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", out_path.display(), e));
}

/// Recursively collect every regular file below `dir`.
fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries =
        fs::read_dir(dir).unwrap_or_else(|e| panic!("Failed to read {}: {}", dir.display(), e));
    for entry in entries {
        let path = entry.expect("Failed to read directory entry").path();
        println!("cargo::rerun-if-changed={}", path.display());
        if path.is_dir() {
            collect_files(&path, files);
        } else {
            files.push(path);
        }
    }
}

/// `/` separated path of `path` relative to the bundle root.
///
/// Format: `<root>/men/01.jpg` → `"men/01.jpg"`
fn bundle_key(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap();
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
