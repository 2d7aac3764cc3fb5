fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Compile the wire contract for the generation runtime
    tonic_build::compile_protos("../../proto/generation.proto")?;
    Ok(())
}
