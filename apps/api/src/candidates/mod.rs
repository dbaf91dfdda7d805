// Candidate intake: submission validation, the add-candidate orchestration and
// its HTTP controllers. Persistence goes through `store::CandidateStore`.

pub mod errors;
pub mod handlers;
pub mod service;
pub mod submission;
pub mod validation;
