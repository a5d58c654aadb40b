mod list_organizations;

pub use list_organizations::ListOrganizationsUseCase;
