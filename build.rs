use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata backs `roster-rs --version` and the default application version
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
