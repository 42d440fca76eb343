fn main() {
    // Embed Windows icon when the resource is present
    #[cfg(target_os = "windows")]
    {
        if std::path::Path::new("seapig.ico").exists() {
            let mut res = winres::WindowsResource::new();
            res.set_icon("seapig.ico");
            res.compile().unwrap();
        }
    }
}
