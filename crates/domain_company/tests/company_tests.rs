//! Tests for company management

use std::sync::Arc;

use core_kernel::{Actor, CompanyId, UserId};

use domain_company::company::{Company, CompanySize, CompanyUpdate, CreateCompany};
use domain_company::ports::mock::{MockCompanyStore, MockProfileDirectory};
use domain_company::service::CompanyService;
use domain_company::{CompanyError, CompanyStore};

fn create_data(name: &str) -> CreateCompany {
    CreateCompany {
        name: name.to_string(),
        description: None,
        website: Some("https://www.acme.com".to_string()),
        sectors: vec!["Technology".to_string()],
        locations: vec!["London".to_string()],
        size: Some(CompanySize::From51To200),
    }
}

fn service() -> (CompanyService, Arc<MockCompanyStore>) {
    let store = Arc::new(MockCompanyStore::new());
    let profiles = Arc::new(MockProfileDirectory::new());
    (CompanyService::new(store.clone(), profiles), store)
}

async fn owned_company(store: &MockCompanyStore, owner: UserId) -> CompanyId {
    let mut company = Company::create(create_data("Acme Recruitment"), "acme-recruitment".into());
    company.owner_id = Some(owner);
    let id = company.id;
    store.seed(company).await;
    id
}

mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_admin_creates_listing_with_derived_slug_and_domain() {
        let (service, store) = service();
        let admin = Actor::admin(UserId::new());

        let company = service
            .create_company(Some(&admin), create_data("Acme Recruitment Ltd."))
            .await
            .unwrap();

        assert_eq!(company.slug, "acme-recruitment-ltd");
        assert_eq!(company.website_domain.as_deref(), Some("acme.com"));
        assert!(store.get(company.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_non_admin_cannot_create() {
        let (service, _) = service();

        let err = service
            .create_company(Some(&Actor::user(UserId::new())), create_data("Acme"))
            .await
            .unwrap_err();
        assert!(matches!(err, CompanyError::Unauthorized));

        let err = service
            .create_company(None, create_data("Acme"))
            .await
            .unwrap_err();
        assert!(matches!(err, CompanyError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_similar_name_collides_on_slug() {
        let (service, _) = service();
        let admin = Actor::admin(UserId::new());

        service
            .create_company(Some(&admin), create_data("Acme Recruitment"))
            .await
            .unwrap();

        let err = service
            .create_company(Some(&admin), create_data("ACME -- Recruitment!"))
            .await
            .unwrap_err();
        assert!(matches!(err, CompanyError::SlugTaken));
    }

    #[tokio::test]
    async fn test_name_without_alphanumerics_rejected() {
        let (service, _) = service();
        let admin = Actor::admin(UserId::new());

        let err = service
            .create_company(Some(&admin), create_data("!!!"))
            .await
            .unwrap_err();
        assert!(matches!(err, CompanyError::Validation(_)));
    }
}

mod update_tests {
    use super::*;

    #[tokio::test]
    async fn test_owner_updates_listing() {
        let (service, store) = service();
        let owner = UserId::new();
        let id = owned_company(&store, owner).await;

        let updated = service
            .update_company(
                Some(&Actor::user(owner)),
                id,
                CompanyUpdate {
                    description: Some("We recruit engineers".to_string()),
                    website: Some("https://acme.io".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.description.as_deref(), Some("We recruit engineers"));
        // Domain follows the website.
        assert_eq!(updated.website_domain.as_deref(), Some("acme.io"));
    }

    #[tokio::test]
    async fn test_non_owner_cannot_update() {
        let (service, store) = service();
        let id = owned_company(&store, UserId::new()).await;

        let err = service
            .update_company(
                Some(&Actor::user(UserId::new())),
                id,
                CompanyUpdate::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CompanyError::EditForbidden));
    }

    #[tokio::test]
    async fn test_update_unknown_company() {
        let (service, _) = service();

        let err = service
            .update_company(
                Some(&Actor::user(UserId::new())),
                CompanyId::new(),
                CompanyUpdate::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CompanyError::CompanyNotFound));
    }
}

mod transfer_tests {
    use super::*;

    #[tokio::test]
    async fn test_owner_transfers_to_known_email() {
        let store = Arc::new(MockCompanyStore::new());
        let owner = UserId::new();
        let successor = UserId::new();
        let profiles = Arc::new(
            MockProfileDirectory::new()
                .with_user("new-owner@acme.com", successor)
                .await,
        );
        let service = CompanyService::new(store.clone(), profiles);
        let id = owned_company(&store, owner).await;

        service
            .transfer_ownership(Some(&Actor::user(owner)), id, "new-owner@acme.com")
            .await
            .unwrap();

        let company = store.get(id).await.unwrap().unwrap();
        assert_eq!(company.owner_id, Some(successor));
    }

    #[tokio::test]
    async fn test_transfer_to_unknown_email_fails() {
        let (service, store) = service();
        let owner = UserId::new();
        let id = owned_company(&store, owner).await;

        let err = service
            .transfer_ownership(Some(&Actor::user(owner)), id, "nobody@nowhere.com")
            .await
            .unwrap_err();
        assert!(matches!(err, CompanyError::UserNotFound));

        // Ownership unchanged on failure.
        let company = store.get(id).await.unwrap().unwrap();
        assert_eq!(company.owner_id, Some(owner));
    }

    #[tokio::test]
    async fn test_non_owner_cannot_transfer() {
        let (service, store) = service();
        let id = owned_company(&store, UserId::new()).await;

        let err = service
            .transfer_ownership(Some(&Actor::user(UserId::new())), id, "x@y.com")
            .await
            .unwrap_err();
        assert!(matches!(err, CompanyError::TransferForbidden));
    }
}

mod delete_tests {
    use super::*;

    #[tokio::test]
    async fn test_admin_deletes_listing() {
        let (service, store) = service();
        let id = owned_company(&store, UserId::new()).await;

        service
            .delete_company(Some(&Actor::admin(UserId::new())), id)
            .await
            .unwrap();

        assert!(store.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_owner_cannot_delete() {
        let (service, store) = service();
        let owner = UserId::new();
        let id = owned_company(&store, owner).await;

        let err = service
            .delete_company(Some(&Actor::user(owner)), id)
            .await
            .unwrap_err();
        assert!(matches!(err, CompanyError::Unauthorized));
    }

    #[tokio::test]
    async fn test_delete_unknown_company() {
        let (service, _) = service();

        let err = service
            .delete_company(Some(&Actor::admin(UserId::new())), CompanyId::new())
            .await
            .unwrap_err();
        assert!(matches!(err, CompanyError::CompanyNotFound));
    }
}
