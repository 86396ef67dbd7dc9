use super::*;
use crate::tensor;

#[test]
fn test_from_json_cnn3d_to_feed_forward() -> Result<(), VoxFlatError> {
    let p = PreProcessor::from_json(
        r#"{"type":"cnn3DToFeedForward","inputDepth":2,"inputHeight":3,"inputWidth":3,"numChannels":4,"isNCDHW":false}"#,
    )?;
    assert_eq!(
        p,
        PreProcessor::Cnn3DToFeedForward(Cnn3DToFeedForwardPreProcessor::new(2, 3, 3, 4, false)?)
    );
    Ok(())
}

#[test]
fn test_json_round_trip_keeps_flat_record() -> Result<(), VoxFlatError> {
    let p: PreProcessor = FeedForwardToCnn3DPreProcessor::new(1, 2, 3, 4, true)?.into();
    let json = p.to_json()?;
    let value: serde_json::Value =
        serde_json::from_str(&json).map_err(|e| VoxFlatError::Serialization(e.to_string()))?;
    assert_eq!(value["type"], "feedForwardToCnn3D");
    assert_eq!(value["inputDepth"], 1);
    assert_eq!(value["numChannels"], 4);
    assert_eq!(value["isNCDHW"], true);
    assert_eq!(PreProcessor::from_json(&json)?, p);
    Ok(())
}

#[test]
fn test_from_json_errors() {
    let malformed = PreProcessor::from_json("{not json");
    assert!(matches!(malformed, Err(VoxFlatError::Serialization(_))));

    let unknown = PreProcessor::from_json(r#"{"type":"rnnToFeedForward"}"#);
    assert!(matches!(unknown, Err(VoxFlatError::Serialization(_))));

    let zero = PreProcessor::from_json(
        r#"{"type":"cnn3DToFeedForward","inputDepth":2,"inputHeight":3,"inputWidth":3,"numChannels":0}"#,
    );
    match zero {
        Err(VoxFlatError::Serialization(msg)) => assert!(msg.contains("must all be positive"), "{}", msg),
        other => panic!("expected serialization error, got {:?}", other),
    }
}

#[test]
fn test_from_json_rejects_overflowing_geometry() {
    let huge = PreProcessor::from_json(
        r#"{"type":"cnn3DToFeedForward","inputDepth":4294967296,"inputHeight":4294967296,"inputWidth":1,"numChannels":1}"#,
    );
    match huge {
        Err(VoxFlatError::Serialization(msg)) => assert!(msg.contains("overflows"), "{}", msg),
        other => panic!("expected serialization error, got {:?}", other),
    }
}

#[test]
fn test_enum_delegates() -> Result<(), VoxFlatError> {
    let p: PreProcessor = Cnn3DToFeedForwardPreProcessor::new(2, 3, 3, 4, true)?.into();
    let input = tensor::zeros(&[10, 4, 2, 3, 3])?;
    let flat = p.pre_process(&input, 10)?;
    assert_eq!(flat.shape(), vec![10, 72]);
    assert_eq!(p.backprop(&flat, 10)?.shape(), vec![10, 4, 2, 3, 3]);

    let mask = tensor::ones(&[10])?;
    let (m, s) = p.feed_forward_mask_array(Some(&mask), Some(MaskState::Passthrough), 10);
    assert!(m.map_or(false, |m| m.ptr_eq(&mask)));
    assert_eq!(s, Some(MaskState::Passthrough));

    let boxed: Box<dyn InputPreProcessor> = p.box_clone();
    assert_eq!(
        boxed.get_output_type(Some(&InputType::convolutional_3d(Default::default(), 2, 3, 3, 4)))?,
        InputType::feed_forward(72)
    );
    Ok(())
}

#[test]
fn test_validate_geometry() {
    assert!(validate_geometry(1, 1, 1, 1).is_ok());
    assert!(matches!(
        validate_geometry(1, 1, 0, 1),
        Err(VoxFlatError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        validate_geometry(usize::MAX, 2, 1, 1),
        Err(VoxFlatError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_cnn3d_shape_layouts() {
    assert_eq!(cnn3d_shape(10, 2, 3, 3, 4, true), vec![10, 4, 2, 3, 3]);
    assert_eq!(cnn3d_shape(10, 2, 3, 3, 4, false), vec![10, 2, 3, 3, 4]);
}
