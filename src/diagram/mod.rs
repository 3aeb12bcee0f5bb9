pub mod dot;

pub use dot::{Cluster, Edge, Graph, Node};

/// The network architecture of the root-access broker: clients reach the four
/// Lambda functions through Route 53 and an ALB; the functions reach AWS APIs
/// through VPC endpoints and act on member-account root principals under an
/// Organizations SCP. Documentation artifact only.
pub fn architecture() -> Graph {
    let lambdas = ["lambda_s3", "lambda_sqs", "lambda_create", "lambda_delete"];
    let roots = ["root_a", "root_n"];

    let mut graph = Graph::new(
        "root_access_architecture",
        "AWS Root Access Management - Network Architecture",
    )
    .node("users", "External Clients\\n(Browser/CLI)")
    .cluster(
        Cluster::new("dns", "DNS Resolution")
            .node("route53", "Route 53\\nHosted Zone")
            .node("dns_record", "ram.example.com\\nA Record"),
    )
    .cluster(
        Cluster::new("vpc", "Management Account VPC (us-east-1)")
            .child(
                Cluster::new("public", "Public Subnets (Multi-AZ)")
                    .node("alb", "Application Load Balancer\\nram.example.com")
                    .node("acm", "ACM Certificate\\n*.example.com"),
            )
            .child(
                Cluster::new("private", "Private Subnets (Multi-AZ)")
                    .node("lambda_s3", "unlock_s3_bucket\\nLambda")
                    .node("lambda_sqs", "unlock_sqs_queue\\nLambda")
                    .node("lambda_create", "create_root_login_profile\\nLambda")
                    .node("lambda_delete", "delete_root_login_profile\\nLambda"),
            )
            .child(
                Cluster::new("endpoints", "VPC Endpoints\\n(Private AWS API Access)")
                    .node("vpce_iam", "IAM\\n(Global)")
                    .node("vpce_sts", "STS")
                    .node("vpce_s3", "S3\\n(Gateway)")
                    .node("vpce_sqs", "SQS")
                    .node("vpce_logs", "CloudWatch\\nLogs"),
            ),
    )
    .cluster(
        Cluster::new("members", "Multi-Region Member Accounts")
            .child(
                Cluster::new("account_a", "Account A")
                    .node("s3_a", "S3 Buckets")
                    .node("sqs_a", "SQS Queues")
                    .node("root_a", "Root Principal"),
            )
            .child(
                Cluster::new("account_n", "Account N")
                    .node("s3_n", "S3 Buckets")
                    .node("sqs_n", "SQS Queues")
                    .node("root_n", "Root Principal"),
            ),
    )
    .cluster(
        Cluster::new("governance", "AWS Organizations").node(
            "scp",
            "Service Control Policy\\nDeny Long-term Root Creds",
        ),
    )
    .edge(Edge::new("users", "route53").label("HTTPS").style("bold"))
    .edge(Edge::new("route53", "dns_record"))
    .edge(Edge::new("dns_record", "alb"))
    .edge(Edge::new("acm", "alb").label("TLS Cert").style("dotted"))
    .edge(Edge::new("alb", "lambda_s3").label("/unlock-s3-bucket/*"))
    .edge(Edge::new("alb", "lambda_sqs").label("/unlock-sqs-queue/*"))
    .edge(Edge::new("alb", "lambda_create").label("/create-root-login-profile/*"))
    .edge(Edge::new("alb", "lambda_delete").label("/delete-root-login-profile/*"));

    for lambda in lambdas {
        graph = graph
            .edge(Edge::new(lambda, "vpce_sts").label("sts:AssumeRoot").style("dashed"))
            .edge(Edge::new(lambda, "vpce_logs").label("Logs").color("gray"));
    }

    graph = graph
        .edge(Edge::new("lambda_s3", "vpce_s3").label("S3 API"))
        .edge(Edge::new("lambda_sqs", "vpce_sqs").label("SQS API"))
        .edge(Edge::new("lambda_create", "vpce_iam").label("IAM API"))
        .edge(Edge::new("lambda_delete", "vpce_iam").label("IAM API"));

    for root in roots {
        graph = graph.edge(
            Edge::new("vpce_sts", root)
                .label("Temp Root Sessions")
                .style("dashed")
                .color("red"),
        );
    }

    graph = graph
        .edge(Edge::new("root_a", "s3_a"))
        .edge(Edge::new("root_a", "sqs_a"))
        .edge(Edge::new("root_n", "s3_n"))
        .edge(Edge::new("root_n", "sqs_n"));

    for root in roots {
        graph = graph.edge(
            Edge::new("scp", root)
                .label("Policy Enforcement")
                .style("dotted")
                .color("orange"),
        );
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn architecture_names_all_four_lambdas() {
        let dot = architecture().render();
        assert!(dot.contains("unlock_s3_bucket"));
        assert!(dot.contains("unlock_sqs_queue"));
        assert!(dot.contains("create_root_login_profile"));
        assert!(dot.contains("delete_root_login_profile"));
    }

    #[test]
    fn architecture_routes_assume_root_through_sts_endpoint() {
        let dot = architecture().render();
        assert!(dot.contains("lambda_s3 -> vpce_sts [label=\"sts:AssumeRoot\", style=dashed];"));
        assert!(dot.contains("vpce_sts -> root_a"));
        assert!(dot.contains("vpce_sts -> root_n"));
    }

    #[test]
    fn architecture_is_governed_by_scp() {
        let dot = architecture().render();
        assert!(dot.contains("scp -> root_a"));
        assert!(dot.contains("Deny Long-term Root Creds"));
    }
}
