//! ONNX-backed AQI regression model.
//!
//! Loads a trained regression artifact exported to ONNX and runs batched
//! forward passes over the forecast feature matrix. Requires the `onnx`
//! feature.

#[cfg(feature = "onnx")]
mod inner {
    use std::path::Path;
    use std::sync::Arc;

    use ndarray::ArrayView2;
    use ort::session::Session;
    use ort::value::Tensor;
    use parking_lot::Mutex;
    use tracing::info;

    use aqicast_core::{Error, Result};

    use crate::model::AqiModel;

    /// ONNX regression model over pollutant feature rows.
    pub struct OnnxModel {
        session: Arc<Mutex<Session>>,
    }

    impl OnnxModel {
        /// Load an ONNX model from the given directory.
        ///
        /// Expects `model_dir/model.onnx`.
        pub fn load(model_dir: &Path) -> std::result::Result<Self, String> {
            let model_path = model_dir.join("model.onnx");

            if !model_path.exists() {
                return Err(format!("Model not found: {}", model_path.display()));
            }

            // Initialize ONNX Runtime environment.
            // With load-dynamic feature, ORT_DYLIB_PATH env var must point to libonnxruntime.so
            ort::init().commit();

            let session = Session::builder()
                .map_err(|e| format!("Failed to create session builder: {}", e))?
                .with_intra_threads(2)
                .map_err(|e| format!("Failed to set threads: {}", e))?
                .commit_from_file(&model_path)
                .map_err(|e| format!("Failed to load ONNX model: {}", e))?;

            info!("ONNX model loaded: {}", model_path.display());

            Ok(Self {
                session: Arc::new(Mutex::new(session)),
            })
        }
    }

    impl AqiModel for OnnxModel {
        fn predict(&self, features: ArrayView2<'_, f32>) -> Result<Vec<f32>> {
            let (rows, cols) = features.dim();
            if rows == 0 {
                return Ok(Vec::new());
            }

            let data: Vec<f32> = features.iter().copied().collect();
            let input = Tensor::from_array(([rows, cols], data))
                .map_err(|e| Error::Inference(format!("Failed to create input tensor: {}", e)))?;

            let mut session = self.session.lock();
            let outputs = session
                .run(ort::inputs![input])
                .map_err(|e| Error::Inference(format!("ONNX inference failed: {}", e)))?;

            // Regression heads come back as [n], [n, 1] or similar; flatten.
            let (_, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .map_err(|e| Error::Inference(format!("Failed to extract output tensor: {}", e)))?;

            if data.is_empty() {
                return Err(Error::Inference("model returned no outputs".into()));
            }

            Ok(data.to_vec())
        }

        fn is_available(&self) -> bool {
            true
        }
    }
}

#[cfg(feature = "onnx")]
pub use inner::OnnxModel;
