#[cfg(feature = "regenerate")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Names are relative to the `proto` include directory.
    const PROTOS: &[&str] = &["common.proto", "s2a_context.proto", "v2/common.proto"];

    println!("cargo:rerun-if-changed=proto");

    let fds = protox::compile(PROTOS, ["proto"])?;
    prost_build::Config::new()
        .btree_map(["."])
        .out_dir("src/generated")
        .compile_fds(fds)?;

    Ok(())
}

// The generated code is checked in, building does not need the schemas.
#[cfg(not(feature = "regenerate"))]
fn main() {}
