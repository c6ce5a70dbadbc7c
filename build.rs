use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata backs `camply-notify --version`
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
