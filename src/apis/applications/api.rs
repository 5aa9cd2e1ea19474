use crate::{
    apis::{
        applications::{
            model::{
                ApplicationBody, ApplicationDetails, CreateApplicationFlags,
                BASIC_APPLICATION_LEVEL,
            },
            CreateApplicationRequest, UpdateApplicationRequest,
        },
        PoyntClientInner,
    },
    client::TargetApp,
    common::with_query,
    http::RequestSpec,
    validation, Error,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use urlencoding::encode;

/// Poynt onboarding applications APIs client.
///
/// An application goes through step-ups (OTP, identity and EIN verification, full
/// onboarding) before underwriting can start.
#[derive(Clone, Debug)]
pub struct ApplicationsApi {
    inner: Arc<PoyntClientInner>,
}

impl ApplicationsApi {
    pub(crate) fn new(inner: Arc<PoyntClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(name = "Create Application", skip(self, request))]
    pub async fn create_application(
        &self,
        request: &CreateApplicationRequest,
    ) -> Result<Value, Error> {
        validation::require([
            ("customerId", request.account.customer_id.is_some()),
            ("shopperId", request.account.shopper_id.is_some()),
        ])?;

        let application_level = request
            .application_level
            .as_deref()
            .unwrap_or(BASIC_APPLICATION_LEVEL);
        let mut application = ApplicationDetails {
            mock: request.mock,
            master_mid: request.master_mid,
            referral_url_id: request.referral_url_id.as_deref(),
            application_level: Some(application_level),
            ..ApplicationDetails::for_account(&request.account)
        };
        if application_level != BASIC_APPLICATION_LEVEL {
            application.medium = request.medium.as_deref();
            application.source = request.source.as_deref();
            application.context = request.context.as_deref();
        }

        let url = with_query(
            "/api/services/applications".to_string(),
            &CreateApplicationFlags {
                find: request.find,
                create_business: request.create_business,
                skip_risk_application: request.skip_risk_application,
                override_referral_url: request.override_referral_url,
                use_shopper_data: request.use_shopper_data,
            },
            &[],
        )?;

        self.send(
            RequestSpec::post(url),
            &ApplicationBody {
                application,
                applicant: request.applicant.as_ref(),
                company: request.company.as_ref(),
            },
        )
        .await
    }

    #[tracing::instrument(name = "Update Application", skip(self, request))]
    pub async fn update_application(
        &self,
        application_id: &str,
        request: &UpdateApplicationRequest,
    ) -> Result<Value, Error> {
        let application = ApplicationDetails {
            context: request.context.as_deref(),
            application_level: Some(
                request
                    .application_level
                    .as_deref()
                    .unwrap_or(BASIC_APPLICATION_LEVEL),
            ),
            ..ApplicationDetails::for_account(&request.account)
        };

        self.send(
            RequestSpec::put(application_url(application_id)),
            &ApplicationBody {
                application,
                applicant: request.applicant.as_ref(),
                company: request.company.as_ref(),
            },
        )
        .await
    }

    /// Submits the one-time password sent to the applicant, or skips the step-up.
    #[tracing::instrument(name = "Pass OTP Verification", skip(self, code))]
    pub async fn pass_otp_verification(
        &self,
        application_id: &str,
        code: &str,
        skip: bool,
    ) -> Result<Value, Error> {
        self.send(
            RequestSpec::post(format!(
                "{}/step-ups/otp?skip={}",
                application_url(application_id),
                skip
            )),
            &json!({ "code": code }),
        )
        .await
    }

    /// Completes the identity verification step-up with a Persona inquiry.
    #[tracing::instrument(name = "Pass Persona Identification", skip(self))]
    pub async fn pass_persona_identification(
        &self,
        application_id: &str,
        inquiry_id: &str,
    ) -> Result<Value, Error> {
        self.send(
            RequestSpec::post(format!(
                "{}/step-ups/identification",
                application_url(application_id)
            )),
            &json!({ "inquiryId": inquiry_id }),
        )
        .await
    }

    /// Completes the EIN verification step-up with a Persona inquiry.
    #[tracing::instrument(name = "Pass Persona EIN Verification", skip(self))]
    pub async fn pass_persona_ein_verification(
        &self,
        application_id: &str,
        inquiry_id: &str,
    ) -> Result<Value, Error> {
        self.send(
            RequestSpec::post(format!(
                "{}/step-ups/verification",
                application_url(application_id)
            )),
            &json!({ "inquiryId": inquiry_id }),
        )
        .await
    }

    /// Provides the full applicant and company details. Both are required.
    #[tracing::instrument(name = "Pass Full Onboarding", skip(self, request))]
    pub async fn pass_full_onboarding(
        &self,
        application_id: &str,
        request: &UpdateApplicationRequest,
    ) -> Result<Value, Error> {
        validation::require([
            ("applicant", request.applicant.is_some()),
            ("company", request.company.is_some()),
        ])?;

        let application = ApplicationDetails {
            context: request.context.as_deref(),
            ..ApplicationDetails::for_account(&request.account)
        };

        self.send(
            RequestSpec::post(format!(
                "{}/step-ups/full-onboarding",
                application_url(application_id)
            )),
            &ApplicationBody {
                application,
                applicant: request.applicant.as_ref(),
                company: request.company.as_ref(),
            },
        )
        .await
    }

    #[tracing::instrument(name = "Start Underwriting", skip(self))]
    pub async fn start_underwriting(&self, application_id: &str) -> Result<Value, Error> {
        self.inner
            .request(
                RequestSpec::post(format!("{}/onboard", application_url(application_id)))
                    .with_app(TargetApp::Web),
            )
            .await
    }

    /// Sends an SMS with a one-time password to the applicant.
    #[tracing::instrument(name = "Send OTP Code", skip(self))]
    pub async fn send_otp_code(&self, application_id: &str) -> Result<Value, Error> {
        self.inner
            .request(
                RequestSpec::post(format!("{}/otp-code", application_url(application_id)))
                    .with_app(TargetApp::Web),
            )
            .await
    }

    async fn send<T>(&self, spec: RequestSpec, body: &T) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body).map_err(|e| Error::Other(e.into()))?;

        self.inner
            .request(spec.with_body(body).with_app(TargetApp::Web))
            .await
    }
}

fn application_url(application_id: &str) -> String {
    format!("/api/services/applications/{}", encode(application_id))
}
