use ideagen_client::GenerateRequest;
use ideagen_client::Team;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub team: Team,
    pub idea: String,
}

impl FormInput {
    pub fn new(team: Team, idea: &str) -> FormInput {
        return FormInput {
            team,
            idea: idea.to_string(),
        };
    }

    /// Blank ideas are refused by the form before they reach the controller.
    pub fn is_submittable(&self) -> bool {
        return !self.idea.trim().is_empty();
    }

    pub fn to_request(&self) -> GenerateRequest {
        return GenerateRequest::new(self.team, self.idea.clone());
    }
}
