pub use super::dish::Entity as Dish;
pub use super::dish_ingredient::Entity as DishIngredient;
pub use super::event::Entity as Event;
pub use super::event_participant::Entity as EventParticipant;
pub use super::ingredient::Entity as Ingredient;
pub use super::participant::Entity as Participant;
pub use super::token::Entity as Token;
pub use super::user::Entity as User;
