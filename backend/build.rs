use std::fs;
use std::io;
use std::path::Path;

/// Copies the built frontend into `static/dist` so it can be embedded.
/// Without a frontend build the directory is still created, empty, and the
/// host answers 404 for every page.
fn main() -> io::Result<()> {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir)?;
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .map_err(io::Error::other)?;
    }
    fs::create_dir_all(out_dir.join("dist"))?;
    println!("cargo:rerun-if-changed=../frontend/dist");
    Ok(())
}
