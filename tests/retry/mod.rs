mod retry_behavior;
mod retry_predicates;
