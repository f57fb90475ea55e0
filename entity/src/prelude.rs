pub use super::activity::Entity as Activity;
pub use super::address::Entity as Address;
pub use super::advisory::Entity as Advisory;
pub use super::amend_advisory::Entity as AmendAdvisory;
pub use super::amend_condition::Entity as AmendCondition;
pub use super::amendment::Entity as Amendment;
pub use super::application::Entity as Application;
pub use super::assessment::Entity as Assessment;
pub use super::condition::Entity as Condition;
pub use super::contact::Entity as Contact;
pub use super::issue::Entity as Issue;
pub use super::licence::Entity as Licence;
pub use super::licence_advisory::Entity as LicenceAdvisory;
pub use super::licence_condition::Entity as LicenceCondition;
pub use super::measure::Entity as Measure;
pub use super::note::Entity as Note;
pub use super::returns::Entity as Returns;
pub use super::revocation::Entity as Revocation;
pub use super::species_set::Entity as SpeciesSet;
pub use super::withdrawal::Entity as Withdrawal;
