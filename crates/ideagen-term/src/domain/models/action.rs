use ideagen_client::GenerateRequest;

#[derive(Debug, Clone)]
pub enum Action {
    GenerationRequest(GenerateRequest),
    HealthCheck,
}
