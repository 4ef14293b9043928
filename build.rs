use protobuf_codegen::Codegen;

fn main() {
    // Every schema generation under src/protos is compiled side by side.
    let proto_files = glob::glob("src/protos/*.proto")
        .expect("Failed to read glob pattern")
        .map(|entry| entry.expect("unreadable proto path"))
        .collect::<Vec<_>>();

    for proto in &proto_files {
        println!("cargo:rerun-if-changed={}", proto.display());
    }

    Codegen::new()
        .pure()
        .cargo_out_dir("protos")
        .inputs(&proto_files)
        .include("src/protos")
        .run_from_script();
}
