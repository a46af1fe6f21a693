use chrono::NaiveDate;
use sqlx::sqlite::SqlitePoolOptions;

use recruiting_crm_backend::dto::application_dto::{
    CreateApplicationPayload, UpdateApplicationPayload,
};
use recruiting_crm_backend::dto::candidate_dto::CreateCandidatePayload;
use recruiting_crm_backend::dto::client_dto::CreateClientPayload;
use recruiting_crm_backend::dto::payment_dto::CreatePaymentPayload;
use recruiting_crm_backend::dto::recruiter_dto::CreateRecruiterPayload;
use recruiting_crm_backend::dto::vacancy_dto::CreateVacancyPayload;
use recruiting_crm_backend::error::Error;
use recruiting_crm_backend::AppState;

async fn setup_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("pool");
    sqlx::migrate!("./migrations").run(&pool).await.expect("migrations");
    AppState::new(pool)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Creates one client, recruiter, vacancy (fee 1500) and candidate; returns
/// (candidate_id, vacancy_id, recruiter_id).
async fn seed_entities(state: &AppState) -> (i64, i64, i64) {
    let client = state
        .client_service
        .create(CreateClientPayload {
            name: "Acme Corp".to_string(),
        })
        .await
        .expect("client");
    let recruiter = state
        .recruiter_service
        .create(CreateRecruiterPayload {
            name: "Dana Silver".to_string(),
        })
        .await
        .expect("recruiter");
    let vacancy = state
        .vacancy_service
        .create(CreateVacancyPayload {
            client_id: client.id,
            title: "Backend Engineer".to_string(),
            fee_amount: 1500.0,
        })
        .await
        .expect("vacancy");
    let candidate = state
        .candidate_service
        .create(CreateCandidatePayload {
            full_name: "Ivan Petrov".to_string(),
            phone: None,
            email: None,
            notes: None,
        })
        .await
        .expect("candidate");
    (candidate.id, vacancy.id, recruiter.id)
}

fn base_payload(candidate_id: i64, vacancy_id: i64, recruiter_id: i64) -> CreateApplicationPayload {
    CreateApplicationPayload {
        candidate_id,
        vacancy_id,
        recruiter_id,
        date_contacted: date(2024, 1, 10),
        status: None,
        rejection_date: None,
        start_date: None,
        paid: false,
        paid_date: None,
        payment_amount: 0.0,
        is_replacement: false,
        replacement_of_id: None,
        replacement_note: None,
    }
}

fn empty_update() -> UpdateApplicationPayload {
    UpdateApplicationPayload {
        date_contacted: None,
        status: None,
        rejection_date: None,
        start_date: None,
        is_replacement: None,
        replacement_of_id: None,
        replacement_note: None,
    }
}

#[tokio::test]
async fn create_defaults_to_new_status_and_unpaid() {
    let state = setup_state().await;
    let (candidate_id, vacancy_id, recruiter_id) = seed_entities(&state).await;

    let application = state
        .application_service
        .create(base_payload(candidate_id, vacancy_id, recruiter_id))
        .await
        .expect("create");

    assert_eq!(application.status, "new");
    assert!(!application.paid);
    assert_eq!(application.payment_amount, 0.0);
    assert_eq!(application.paid_date, None);
    assert_eq!(application.date_contacted, date(2024, 1, 10));
}

#[tokio::test]
async fn create_rejects_unknown_references() {
    let state = setup_state().await;
    let (candidate_id, vacancy_id, recruiter_id) = seed_entities(&state).await;

    let mut payload = base_payload(9999, vacancy_id, recruiter_id);
    let err = state.application_service.create(payload).await.unwrap_err();
    assert!(matches!(err, Error::BadRequest(_)), "unknown candidate: {err}");

    payload = base_payload(candidate_id, 9999, recruiter_id);
    let err = state.application_service.create(payload).await.unwrap_err();
    assert!(matches!(err, Error::BadRequest(_)), "unknown vacancy: {err}");

    payload = base_payload(candidate_id, vacancy_id, 9999);
    let err = state.application_service.create(payload).await.unwrap_err();
    assert!(matches!(err, Error::BadRequest(_)), "unknown recruiter: {err}");
}

#[tokio::test]
async fn rejected_status_requires_rejection_date() {
    let state = setup_state().await;
    let (candidate_id, vacancy_id, recruiter_id) = seed_entities(&state).await;

    let mut payload = base_payload(candidate_id, vacancy_id, recruiter_id);
    payload.status = Some("rejected".to_string());
    let err = state
        .application_service
        .create(payload.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::BadRequest(_)));

    payload.rejection_date = Some(date(2024, 2, 1));
    let application = state.application_service.create(payload).await.expect("create");
    assert_eq!(application.status, "rejected");
    assert_eq!(application.rejection_date, Some(date(2024, 2, 1)));
}

#[tokio::test]
async fn hired_status_requires_start_date() {
    let state = setup_state().await;
    let (candidate_id, vacancy_id, recruiter_id) = seed_entities(&state).await;

    let mut payload = base_payload(candidate_id, vacancy_id, recruiter_id);
    payload.status = Some("hired".to_string());
    let err = state
        .application_service
        .create(payload.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::BadRequest(_)));

    payload.start_date = Some(date(2024, 3, 1));
    let application = state.application_service.create(payload).await.expect("create");
    assert_eq!(application.status, "hired");
    assert_eq!(application.start_date, Some(date(2024, 3, 1)));
}

#[tokio::test]
async fn unknown_status_is_rejected() {
    let state = setup_state().await;
    let (candidate_id, vacancy_id, recruiter_id) = seed_entities(&state).await;

    let mut payload = base_payload(candidate_id, vacancy_id, recruiter_id);
    payload.status = Some("archived".to_string());
    let err = state.application_service.create(payload).await.unwrap_err();
    assert!(matches!(err, Error::BadRequest(_)));
}

#[tokio::test]
async fn initial_payment_falls_back_to_vacancy_fee() {
    let state = setup_state().await;
    let (candidate_id, vacancy_id, recruiter_id) = seed_entities(&state).await;

    let mut payload = base_payload(candidate_id, vacancy_id, recruiter_id);
    payload.status = Some("hired".to_string());
    payload.start_date = Some(date(2024, 3, 1));
    payload.paid = true;
    payload.paid_date = Some(date(2024, 3, 5));

    let application = state.application_service.create(payload).await.expect("create");
    assert!(application.paid);
    assert_eq!(application.payment_amount, 1500.0);
    assert_eq!(application.paid_date, Some(date(2024, 3, 5)));

    let payments = state
        .payment_service
        .list_for_application(application.id)
        .await
        .expect("payments");
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].amount, 1500.0);
    assert_eq!(payments[0].note.as_deref(), Some("initial payment"));
}

#[tokio::test]
async fn initial_payment_uses_explicit_amount_when_positive() {
    let state = setup_state().await;
    let (candidate_id, vacancy_id, recruiter_id) = seed_entities(&state).await;

    let mut payload = base_payload(candidate_id, vacancy_id, recruiter_id);
    payload.paid = true;
    payload.paid_date = Some(date(2024, 4, 1));
    payload.payment_amount = 2000.0;

    let application = state.application_service.create(payload).await.expect("create");
    assert_eq!(application.payment_amount, 2000.0);
}

#[tokio::test]
async fn paid_flag_without_date_creates_no_payment() {
    let state = setup_state().await;
    let (candidate_id, vacancy_id, recruiter_id) = seed_entities(&state).await;

    let mut payload = base_payload(candidate_id, vacancy_id, recruiter_id);
    payload.paid = true;

    let application = state.application_service.create(payload).await.expect("create");
    assert!(!application.paid);
    assert_eq!(application.payment_amount, 0.0);
    let payments = state
        .payment_service
        .list_for_application(application.id)
        .await
        .expect("payments");
    assert!(payments.is_empty());
}

#[tokio::test]
async fn update_merges_partial_fields_and_revalidates() {
    let state = setup_state().await;
    let (candidate_id, vacancy_id, recruiter_id) = seed_entities(&state).await;

    let application = state
        .application_service
        .create(base_payload(candidate_id, vacancy_id, recruiter_id))
        .await
        .expect("create");

    // Status change alone, other fields keep their values.
    let mut update = empty_update();
    update.status = Some("in_process".to_string());
    let updated = state
        .application_service
        .update(application.id, update)
        .await
        .expect("update");
    assert_eq!(updated.status, "in_process");
    assert_eq!(updated.date_contacted, application.date_contacted);

    // Moving to rejected without a date must fail on the merged record.
    let mut update = empty_update();
    update.status = Some("rejected".to_string());
    let err = state
        .application_service
        .update(application.id, update)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::BadRequest(_)));

    let mut update = empty_update();
    update.status = Some("rejected".to_string());
    update.rejection_date = Some(date(2024, 2, 10));
    let updated = state
        .application_service
        .update(application.id, update)
        .await
        .expect("update");
    assert_eq!(updated.status, "rejected");

    // Touching only the date on an already-rejected application passes
    // because the merged record still satisfies the rule.
    let mut update = empty_update();
    update.rejection_date = Some(date(2024, 2, 11));
    let updated = state
        .application_service
        .update(application.id, update)
        .await
        .expect("update");
    assert_eq!(updated.status, "rejected");
    assert_eq!(updated.rejection_date, Some(date(2024, 2, 11)));
}

#[tokio::test]
async fn update_to_hired_without_start_date_fails() {
    let state = setup_state().await;
    let (candidate_id, vacancy_id, recruiter_id) = seed_entities(&state).await;

    let application = state
        .application_service
        .create(base_payload(candidate_id, vacancy_id, recruiter_id))
        .await
        .expect("create");

    let mut update = empty_update();
    update.status = Some("hired".to_string());
    let err = state
        .application_service
        .update(application.id, update)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::BadRequest(_)));
}

#[tokio::test]
async fn update_missing_application_is_not_found() {
    let state = setup_state().await;
    seed_entities(&state).await;

    let err = state
        .application_service
        .update(4242, empty_update())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn delete_application_cascades_to_payments() {
    let state = setup_state().await;
    let (candidate_id, vacancy_id, recruiter_id) = seed_entities(&state).await;

    let application = state
        .application_service
        .create(base_payload(candidate_id, vacancy_id, recruiter_id))
        .await
        .expect("create");
    state
        .payment_service
        .add(
            application.id,
            CreatePaymentPayload {
                paid_date: date(2024, 5, 1),
                amount: 300.0,
                note: None,
            },
        )
        .await
        .expect("payment");

    state
        .application_service
        .delete(application.id)
        .await
        .expect("delete");

    let remaining: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM payments WHERE application_id = ?")
            .bind(application.id)
            .fetch_one(&state.pool)
            .await
            .expect("count");
    assert_eq!(remaining, 0);

    let err = state
        .application_service
        .get_by_id(application.id)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn delete_missing_application_is_not_found() {
    let state = setup_state().await;

    let err = state.application_service.delete(77).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn deleting_replaced_application_clears_back_reference() {
    let state = setup_state().await;
    let (candidate_id, vacancy_id, recruiter_id) = seed_entities(&state).await;

    let original = state
        .application_service
        .create(base_payload(candidate_id, vacancy_id, recruiter_id))
        .await
        .expect("original");

    let mut replacement = base_payload(candidate_id, vacancy_id, recruiter_id);
    replacement.is_replacement = true;
    replacement.replacement_of_id = Some(original.id);
    replacement.replacement_note = Some("left after probation".to_string());
    let replacement = state
        .application_service
        .create(replacement)
        .await
        .expect("replacement");
    assert_eq!(replacement.replacement_of_id, Some(original.id));

    state
        .application_service
        .delete(original.id)
        .await
        .expect("delete");

    let replacement = state
        .application_service
        .get_by_id(replacement.id)
        .await
        .expect("fetch");
    assert!(replacement.is_replacement);
    assert_eq!(replacement.replacement_of_id, None);
}
