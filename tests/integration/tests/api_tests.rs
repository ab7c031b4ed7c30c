//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use uuid::Uuid;

/// A league admin subject with a minted token, ready to administer
struct Admin {
    token: String,
}

async fn league_admin(server: &TestServer) -> Admin {
    let id = Uuid::new_v4();
    let email = unique_email();
    server
        .seed_profile(id, &email, "league_admin")
        .await
        .expect("Failed to seed admin profile");
    let token = server.issue_token(id, &email).expect("Failed to mint token");
    Admin { token }
}

fn member_token(server: &TestServer) -> String {
    server
        .issue_token(Uuid::new_v4(), &unique_email())
        .expect("Failed to mint token")
}

async fn create_gym(server: &TestServer, admin: &Admin) -> GymResponse {
    let response = server
        .post_auth("/api/v1/gyms", &admin.token, &CreateGymRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Gym Code Redemption Tests
// ============================================================================

#[tokio::test]
async fn test_redeem_gym_code_unlocks_gym() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = league_admin(&server).await;
    let gym = create_gym(&server, &admin).await;
    let code = unique_code();
    server.seed_gym_code(gym.id, &code, None).await.unwrap();

    let token = member_token(&server);

    // Locked before redeeming
    let response = server
        .get_auth(&format!("/api/v1/gyms/{}/unlock", gym.id), &token)
        .await
        .unwrap();
    let unlock: UnlockResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!unlock.unlocked);

    // Redeem (raw input is normalized)
    let request = RedeemGymCodeRequest {
        code: format!("  {}  ", code.to_lowercase()),
        gym_id: gym.id,
    };
    let response = server
        .post_auth("/api/v1/codes/redeem", &token, &request)
        .await
        .unwrap();
    let redeemed: GymCodeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(redeemed.code, code);
    assert_eq!(redeemed.status, "redeemed");
    assert!(redeemed.redeemed_by.is_some());

    // Unlocked after redeeming
    let response = server
        .get_auth(&format!("/api/v1/gyms/{}/unlock", gym.id), &token)
        .await
        .unwrap();
    let unlock: UnlockResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(unlock.unlocked);
}

#[tokio::test]
async fn test_gym_code_is_single_use() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = league_admin(&server).await;
    let gym = create_gym(&server, &admin).await;
    let code = unique_code();
    server.seed_gym_code(gym.id, &code, None).await.unwrap();

    let request = |gym_id| RedeemGymCodeRequest {
        code: code.clone(),
        gym_id,
    };

    // First subject wins
    let winner = member_token(&server);
    let response = server
        .post_auth("/api/v1/codes/redeem", &winner, &request(gym.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Second subject gets a conflict
    let loser = member_token(&server);
    let response = server
        .post_auth("/api/v1/codes/redeem", &loser, &request(gym.id))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "CODE_ALREADY_REDEEMED");
}

#[tokio::test]
async fn test_redeem_unknown_code_is_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = league_admin(&server).await;
    let gym = create_gym(&server, &admin).await;

    let request = RedeemGymCodeRequest {
        code: "KL-NOPE-0000".to_string(),
        gym_id: gym.id,
    };
    let response = server
        .post_auth("/api/v1/codes/redeem", &member_token(&server), &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "CODE_NOT_FOUND");
}

#[tokio::test]
async fn test_redeem_code_at_wrong_gym() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = league_admin(&server).await;
    let gym_a = create_gym(&server, &admin).await;
    let gym_b = create_gym(&server, &admin).await;
    let code = unique_code();
    server.seed_gym_code(gym_a.id, &code, None).await.unwrap();

    let request = RedeemGymCodeRequest {
        code,
        gym_id: gym_b.id,
    };
    let response = server
        .post_auth("/api/v1/codes/redeem", &member_token(&server), &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "WRONG_GYM");
}

#[tokio::test]
async fn test_redeem_expired_code_is_gone() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = league_admin(&server).await;
    let gym = create_gym(&server, &admin).await;
    let code = unique_code();
    let yesterday = chrono::Utc::now() - chrono::Duration::days(1);
    server
        .seed_gym_code(gym.id, &code, Some(yesterday))
        .await
        .unwrap();

    let request = RedeemGymCodeRequest {
        code,
        gym_id: gym.id,
    };
    let response = server
        .post_auth("/api/v1/codes/redeem", &member_token(&server), &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::GONE).await.unwrap();
    assert_eq!(error.error.code, "CODE_EXPIRED");
}

#[tokio::test]
async fn test_redeem_requires_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RedeemGymCodeRequest {
        code: "KL-ANON-0000".to_string(),
        gym_id: Uuid::new_v4(),
    };

    let response = server.post("/api/v1/codes/redeem", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post_auth("/api/v1/codes/redeem", "not-a-token", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Master Code Tests
// ============================================================================

#[tokio::test]
async fn test_master_code_activates_participation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let code = unique_code();
    server.seed_master_code(&code, None).await.unwrap();
    let token = member_token(&server);

    let response = server
        .post_auth(
            "/api/v1/master-codes/redeem",
            &token,
            &RedeemMasterCodeRequest { code },
        )
        .await
        .unwrap();
    let redemption: MasterRedemptionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(redemption.code.status, "redeemed");
    assert!(redemption.participation_activated_at.is_some());

    // The profile now carries the stamp
    let response = server.get_auth("/api/v1/profiles/@me", &token).await.unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(profile.participation_activated_at.is_some());
}

#[tokio::test]
async fn test_second_master_code_keeps_first_activation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let first = unique_code();
    let second = unique_code();
    server.seed_master_code(&first, None).await.unwrap();
    server.seed_master_code(&second, None).await.unwrap();
    let token = member_token(&server);

    let response = server
        .post_auth(
            "/api/v1/master-codes/redeem",
            &token,
            &RedeemMasterCodeRequest { code: first },
        )
        .await
        .unwrap();
    let initial: MasterRedemptionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/master-codes/redeem",
            &token,
            &RedeemMasterCodeRequest { code: second },
        )
        .await
        .unwrap();
    let repeat: MasterRedemptionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(
        repeat.participation_activated_at,
        initial.participation_activated_at
    );
}

#[tokio::test]
async fn test_expired_master_code_does_not_activate() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let code = unique_code();
    let yesterday = chrono::Utc::now() - chrono::Duration::days(1);
    server.seed_master_code(&code, Some(yesterday)).await.unwrap();
    let token = member_token(&server);

    let response = server
        .post_auth(
            "/api/v1/master-codes/redeem",
            &token,
            &RedeemMasterCodeRequest { code },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::GONE).await.unwrap();

    let response = server.get_auth("/api/v1/profiles/@me", &token).await.unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(profile.participation_activated_at.is_none());
}

// ============================================================================
// Administration Tests
// ============================================================================

#[tokio::test]
async fn test_mint_and_list_gym_codes() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = league_admin(&server).await;
    let gym = create_gym(&server, &admin).await;

    let response = server
        .post_auth(
            &format!("/api/v1/gyms/{}/codes", gym.id),
            &admin.token,
            &MintCodesRequest::of(25),
        )
        .await
        .unwrap();
    let batch: MintedBatchResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(batch.count, 25);
    assert!(batch.codes.iter().all(|c| c.starts_with("KL-")));

    let response = server
        .get_auth(&format!("/api/v1/gyms/{}/codes", gym.id), &admin.token)
        .await
        .unwrap();
    let codes: Vec<GymCodeResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(codes.len(), 25);
}

#[tokio::test]
async fn test_minting_requires_admin_role() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = league_admin(&server).await;
    let gym = create_gym(&server, &admin).await;

    let response = server
        .post_auth(
            &format!("/api/v1/gyms/{}/codes", gym.id),
            &member_token(&server),
            &MintCodesRequest::of(5),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth("/api/v1/master-codes", &member_token(&server), &MintCodesRequest::of(5))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_gym_creation_requires_league_admin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post_auth(
            "/api/v1/gyms",
            &member_token(&server),
            &CreateGymRequest::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_minted_master_code_round_trip() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = league_admin(&server).await;

    let response = server
        .post_auth("/api/v1/master-codes", &admin.token, &MintCodesRequest::of(1))
        .await
        .unwrap();
    let batch: MintedBatchResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let code = batch.codes[0].clone();

    let response = server
        .post_auth(
            "/api/v1/master-codes/redeem",
            &member_token(&server),
            &RedeemMasterCodeRequest { code },
        )
        .await
        .unwrap();
    let redemption: MasterRedemptionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(redemption.participation_activated_at.is_some());
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_profile_created_on_first_contact() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let subject_id = Uuid::new_v4();
    let email = unique_email();
    let token = server.issue_token(subject_id, &email).unwrap();

    let response = server.get_auth("/api/v1/profiles/@me", &token).await.unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.id, subject_id);
    assert_eq!(profile.email, email);
    assert_eq!(profile.role, "member");
    assert!(profile.participation_activated_at.is_none());
}
