use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .unwrap();
    }

    // include_dir! needs the directory to exist even before the frontend has
    // been built once.
    let embedded = out_dir.join("dist");
    if !embedded.exists() {
        fs::create_dir_all(&embedded).unwrap();
        fs::write(
            embedded.join("index.html"),
            "<!DOCTYPE html><html><body>Frontend not built yet. Run trunk build in frontend/.</body></html>",
        )
            .unwrap();
    }

    println!("cargo:rerun-if-changed=../frontend/dist");
}
