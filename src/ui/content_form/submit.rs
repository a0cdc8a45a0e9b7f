// SPDX-License-Identifier: MPL-2.0
//! The submit pipeline: save the content, then upload pending images one by one.

use crate::api::{ApiError, ContentApi, ImageUpload};
use crate::content::{ContentId, Draft};

/// Everything a submission needs, captured from the dialog when it starts.
#[derive(Debug, Clone)]
pub struct SubmitPlan {
    /// Record being edited; `None` creates a new one.
    pub target: Option<ContentId>,
    pub draft: Draft,
    /// Unsaved images in list order.
    pub uploads: Vec<ImageUpload>,
}

/// Outcome of a fully successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReport {
    pub content_id: Option<ContentId>,
    /// Message returned by the content call.
    pub message: String,
    pub created: bool,
    pub uploaded: usize,
}

/// Which step of the pipeline failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailedStage {
    /// The create or update call.
    Content,
    /// The upload of the image at `index` among the pending uploads.
    Upload { index: usize, filename: String },
}

/// A submission that stopped early.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitFailure {
    pub stage: FailedStage,
    pub error: ApiError,
    /// Images uploaded before the failure; they are not rolled back.
    pub uploaded: usize,
}

impl SubmitFailure {
    fn content(error: ApiError) -> Self {
        Self {
            stage: FailedStage::Content,
            error,
            uploaded: 0,
        }
    }
}

/// Runs the submission against `api`.
///
/// The content id used for uploads is the edit target when editing, and the
/// id returned by the create call otherwise. Uploads run strictly in order,
/// each awaited before the next starts; the first failure ends the run.
pub async fn execute<A: ContentApi>(api: A, plan: SubmitPlan) -> Result<SubmitReport, SubmitFailure> {
    let SubmitPlan {
        target,
        draft,
        uploads,
    } = plan;

    let created = target.is_none();
    let (content_id, message) = match target {
        Some(id) => {
            let ack = api
                .update_content(&id, &draft)
                .await
                .map_err(SubmitFailure::content)?;
            (Some(id), ack.message)
        }
        None => {
            let reply = api
                .create_content(&draft)
                .await
                .map_err(SubmitFailure::content)?;
            (reply.id, reply.message)
        }
    };

    if uploads.is_empty() {
        return Ok(SubmitReport {
            content_id,
            message,
            created,
            uploaded: 0,
        });
    }

    let Some(content_id) = content_id else {
        tracing::warn!("create reply carried no id, pending images not uploaded");
        return Err(SubmitFailure::content(ApiError::MissingId));
    };

    let mut uploaded = 0;
    for (index, image) in uploads.iter().enumerate() {
        if let Err(error) = api.upload_image(&content_id, image).await {
            tracing::warn!(
                %content_id,
                filename = %image.filename,
                %error,
                "image upload failed, skipping the remaining ones"
            );
            return Err(SubmitFailure {
                stage: FailedStage::Upload {
                    index,
                    filename: image.filename.clone(),
                },
                error,
                uploaded,
            });
        }
        uploaded += 1;
    }

    Ok(SubmitReport {
        content_id: Some(content_id),
        message,
        created,
        uploaded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Ack, Created};
    use crate::test_utils::{upload, Call, RecordingApi};

    fn draft() -> Draft {
        Draft {
            title: "Title".into(),
            body: "Body".into(),
        }
    }

    fn upload_call(content: i64, filename: &str) -> Call {
        Call::Upload {
            content: ContentId::from(content),
            filename: filename.into(),
        }
    }

    #[tokio::test]
    async fn create_uploads_each_image_to_the_new_id_in_order() {
        let api = RecordingApi::new().with_create(Ok(Created {
            id: Some(ContentId::from(42)),
            message: "ok".into(),
        }));
        let plan = SubmitPlan {
            target: None,
            draft: draft(),
            uploads: vec![upload("first.png"), upload("second.png")],
        };

        let report = execute(api.clone(), plan).await.expect("submission succeeds");

        assert_eq!(report.content_id, Some(ContentId::from(42)));
        assert_eq!(report.uploaded, 2);
        assert!(report.created);
        assert_eq!(
            api.calls(),
            vec![
                Call::Create(draft()),
                upload_call(42, "first.png"),
                upload_call(42, "second.png"),
            ]
        );
    }

    #[tokio::test]
    async fn update_uploads_to_the_edit_target() {
        let api = RecordingApi::new();
        let plan = SubmitPlan {
            target: Some(ContentId::from(7)),
            draft: draft(),
            uploads: vec![upload("a.png")],
        };

        let report = execute(api.clone(), plan).await.unwrap();

        assert!(!report.created);
        assert_eq!(report.message, "updated");
        assert_eq!(
            api.calls(),
            vec![
                Call::Update(ContentId::from(7), draft()),
                upload_call(7, "a.png")
            ]
        );
    }

    #[tokio::test]
    async fn server_error_on_content_call_skips_uploads() {
        let api = RecordingApi::new().with_create(Err(ApiError::Server("标题和内容不能为空".into())));
        let plan = SubmitPlan {
            target: None,
            draft: draft(),
            uploads: vec![upload("a.png")],
        };

        let failure = execute(api.clone(), plan).await.unwrap_err();

        assert_eq!(failure.stage, FailedStage::Content);
        assert_eq!(failure.error, ApiError::Server("标题和内容不能为空".into()));
        assert!(api.uploads().is_empty());
    }

    #[tokio::test]
    async fn failed_update_keeps_the_edit_target_and_skips_uploads() {
        let api = RecordingApi::new().with_update(Err(ApiError::Http {
            status: 500,
            body: "boom".into(),
        }));
        let plan = SubmitPlan {
            target: Some(ContentId::from(7)),
            draft: draft(),
            uploads: vec![upload("a.png")],
        };

        let failure = execute(api.clone(), plan).await.unwrap_err();

        assert_eq!(failure.stage, FailedStage::Content);
        assert_eq!(failure.uploaded, 0);
        assert_eq!(api.calls(), vec![Call::Update(ContentId::from(7), draft())]);
    }

    #[tokio::test]
    async fn first_upload_failure_stops_the_run_without_rollback() {
        let api = RecordingApi::new()
            .with_create(Ok(Created {
                id: Some(ContentId::from(42)),
                message: "ok".into(),
            }))
            .with_uploads(vec![
                Ok(Ack::default()),
                Err(ApiError::Server("disk full".into())),
            ]);
        let plan = SubmitPlan {
            target: None,
            draft: draft(),
            uploads: vec![upload("one.png"), upload("two.png"), upload("three.png")],
        };

        let failure = execute(api.clone(), plan).await.unwrap_err();

        assert_eq!(failure.uploaded, 1);
        assert_eq!(
            failure.stage,
            FailedStage::Upload {
                index: 1,
                filename: "two.png".into()
            }
        );
        assert_eq!(failure.error, ApiError::Server("disk full".into()));
        assert_eq!(
            api.uploads(),
            vec![upload_call(42, "one.png"), upload_call(42, "two.png")],
            "no third upload is attempted"
        );
        assert!(
            !api.calls()
                .iter()
                .any(|c| matches!(c, Call::DeleteContent(_) | Call::DeleteImage(_))),
            "nothing is rolled back"
        );
    }

    #[tokio::test]
    async fn create_without_id_is_fine_when_nothing_to_upload() {
        let api = RecordingApi::new().with_create(Ok(Created {
            id: None,
            message: "内容创建成功".into(),
        }));
        let plan = SubmitPlan {
            target: None,
            draft: draft(),
            uploads: Vec::new(),
        };

        let report = execute(api, plan).await.unwrap();
        assert_eq!(report.content_id, None);
        assert_eq!(report.message, "内容创建成功");
    }

    #[tokio::test]
    async fn create_without_id_fails_when_images_are_pending() {
        let api = RecordingApi::new().with_create(Ok(Created {
            id: None,
            message: "ok".into(),
        }));
        let plan = SubmitPlan {
            target: None,
            draft: draft(),
            uploads: vec![upload("a.png")],
        };

        let failure = execute(api.clone(), plan).await.unwrap_err();
        assert_eq!(failure.error, ApiError::MissingId);
        assert!(api.uploads().is_empty());
    }
}
