fn main() {
    // Only embed the Windows icon when building for a Windows target on a Windows host
    #[cfg(target_os = "windows")]
    {
        let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
        if target_os == "windows" {
            let mut res = winres::WindowsResource::new();
            res.set_icon("resources/HDLAUNCHER.ico");
            if let Err(e) = res.compile() {
                eprintln!("Warning: Failed to embed icon in executable: {}", e);
                eprintln!(
                    "The application will still work, but the .exe may not have the custom icon."
                );
            }
        }
    }
}
