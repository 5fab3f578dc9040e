//! Core domain logic for PetShop.
//! Layers, leaf-first: `model` -> `repo` -> `controller` -> `view`.

pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod view;

pub use controller::envelope::{Envelope, EnvelopeData, SingleRecord};
pub use controller::person_creator::{PersonCreator, PersonCreatorController};
pub use controller::person_finder::{PersonFinder, PersonFinderController};
pub use controller::pet_deleter::{PetDeleter, PetDeleterController};
pub use controller::pet_lister::{PetAttributes, PetLister, PetListerController};
pub use controller::{ControllerError, ControllerResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::person::{NewPerson, Person, PersonId, PersonWithPet};
pub use model::pet::{Pet, PetId};
pub use repo::people_repo::{PeopleRepository, SqlitePeopleRepository};
pub use repo::pets_repo::{PetsRepository, SqlitePetsRepository};
pub use repo::{RepoError, RepoResult};
pub use view::http_types::{HttpRequest, HttpResponse};
pub use view::person_creator_view::PersonCreatorView;
pub use view::person_finder_view::PersonFinderView;
pub use view::pet_deleter_view::PetDeleterView;
pub use view::pet_lister_view::PetListerView;
pub use view::{ViewError, ViewResult};
