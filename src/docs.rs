use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{IssueTokenDto, TokenResponse};
use crate::modules::classes::model::{
    Class, ClassStatus, CreateClassDto, UpdateClassDto, UpdateFeedbackDto, UpdateStatusDto,
};
use crate::modules::payments::model::{
    CreateIntentDto, CreateIntentResponse, Payment, RecordPaymentDto,
};
use crate::modules::selections::model::{
    CreateSelectionDto, PaymentState, SelectOutcome, Selection,
};
use crate::modules::users::model::{
    AdminCheckResponse, InstructorCheckResponse, RegisterOutcome, RegisterUserDto, User, UserRole,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::issue_token,
        crate::modules::users::controller::register_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::check_admin,
        crate::modules::users::controller::check_instructor,
        crate::modules::users::controller::promote_admin,
        crate::modules::users::controller::promote_instructor,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::get_approved_classes,
        crate::modules::classes::controller::get_my_classes,
        crate::modules::classes::controller::get_class,
        crate::modules::classes::controller::update_class,
        crate::modules::classes::controller::set_class_status,
        crate::modules::classes::controller::set_class_feedback,
        crate::modules::selections::controller::get_selections,
        crate::modules::selections::controller::create_selection,
        crate::modules::selections::controller::get_selection,
        crate::modules::selections::controller::delete_selection,
        crate::modules::selections::controller::mark_selection_paid,
        crate::modules::payments::controller::create_payment_intent,
        crate::modules::payments::controller::record_payment,
        crate::modules::payments::controller::get_payments,
    ),
    components(
        schemas(
            User,
            UserRole,
            RegisterUserDto,
            RegisterOutcome,
            AdminCheckResponse,
            InstructorCheckResponse,
            IssueTokenDto,
            TokenResponse,
            Class,
            ClassStatus,
            CreateClassDto,
            UpdateClassDto,
            UpdateStatusDto,
            UpdateFeedbackDto,
            Selection,
            PaymentState,
            CreateSelectionDto,
            SelectOutcome,
            Payment,
            CreateIntentDto,
            CreateIntentResponse,
            RecordPaymentDto,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Token issuance"),
        (name = "Users", description = "Registration, role checks, and promotions"),
        (name = "Classes", description = "Class lifecycle and listings"),
        (name = "Selections", description = "Student enrollments"),
        (name = "Payments", description = "Payment intents and records")
    ),
    info(
        title = "SportsCamp API",
        version = "0.1.0",
        description = "REST backend for the SportsCamp sports-class booking platform.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
