use std::fs;
use std::path::Path;

/// Copies the trunk build of the frontend into `static/dist`, which the
/// server embeds. Without a frontend build the checked-in placeholder page
/// is embedded instead.
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
    } else {
        println!("cargo:warning=frontend/dist not found, embedding the placeholder page");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
