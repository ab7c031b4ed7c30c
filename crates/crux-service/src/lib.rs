//! # crux-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CreateGymRequest, GymCodeResponse, GymResponse, HealthResponse, MasterCodeResponse,
    MasterRedemptionResponse, MintCodesRequest, MintedBatchResponse, ProfileResponse,
    ReadinessResponse, RedeemGymCodeRequest, RedeemMasterCodeRequest, UnlockResponse,
};
pub use services::{
    resolve_identity, start_scan, CodeAdminService, FrameSource, GymService, ProfileService,
    RedemptionService, ScanEvent, ScanHandle, ScanOutcome, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, UnlockService,
};
