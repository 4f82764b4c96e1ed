//! Domain ports and supporting types for the hexagonal boundary.

mod animal_repository;
mod list_page;
mod member_repository;
mod repository_error;

#[cfg(test)]
pub use animal_repository::MockAnimalRepository;
pub use animal_repository::AnimalRepository;
pub use list_page::ListPage;
#[cfg(test)]
pub use member_repository::MockMemberRepository;
pub use member_repository::MemberRepository;
pub use repository_error::RepositoryError;
