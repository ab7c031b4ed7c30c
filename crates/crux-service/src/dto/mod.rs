//! Request and response DTOs for the API layer

mod requests;
mod responses;

pub use requests::{
    CreateGymRequest, MintCodesRequest, RedeemGymCodeRequest, RedeemMasterCodeRequest,
};
pub use responses::{
    GymCodeResponse, GymResponse, HealthResponse, MasterCodeResponse, MasterRedemptionResponse,
    MintedBatchResponse, ProfileResponse, ReadinessResponse, UnlockResponse,
};
