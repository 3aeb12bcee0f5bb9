use root_access_broker::diagram;
use tempfile::TempDir;

#[test]
fn architecture_diagram_renders_and_writes() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("architecture.dot");

    let dot = diagram::architecture().render();
    std::fs::write(&output, &dot).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("digraph root_access_architecture {"));
    assert!(written.contains("AWS Root Access Management"));

    // One route per Lambda behind the ALB.
    assert!(written.contains("alb -> lambda_s3 [label=\"/unlock-s3-bucket/*\"];"));
    assert!(written.contains("alb -> lambda_sqs [label=\"/unlock-sqs-queue/*\"];"));
    assert!(written.contains("alb -> lambda_create [label=\"/create-root-login-profile/*\"];"));
    assert!(written.contains("alb -> lambda_delete [label=\"/delete-root-login-profile/*\"];"));

    // Every Lambda assumes root through the STS endpoint.
    for lambda in ["lambda_s3", "lambda_sqs", "lambda_create", "lambda_delete"] {
        assert!(written.contains(&format!("{lambda} -> vpce_sts")));
    }
}

#[test]
fn architecture_diagram_is_balanced() {
    let dot = diagram::architecture().render();
    assert_eq!(dot.matches('{').count(), dot.matches('}').count());
}
