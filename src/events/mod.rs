use crate::mediator::Event;
use crate::models::ProductChanges;

#[derive(Debug, Clone)]
pub struct ProductAddedEvent {
    pub id: i64,
    pub name: String,
}
impl Event for ProductAddedEvent {}

#[derive(Debug, Clone)]
pub struct ProductUpdatedEvent {
    pub id: i64,
    pub changes: ProductChanges,
}
impl Event for ProductUpdatedEvent {}

#[derive(Debug, Clone)]
pub struct ProductDeletedEvent(pub i64);
impl Event for ProductDeletedEvent {}
