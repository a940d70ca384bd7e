fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use the vendored protoc so builds don't depend on a system install
    std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);

    tonic_build::configure().compile_protos(&["proto/service_file.proto"], &["proto"])?;
    println!("cargo:rerun-if-changed=proto/service_file.proto");
    Ok(())
}
