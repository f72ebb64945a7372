mod frame_purity {
    use kineo::scenes::{self, AGENT_VIDEO_FRAMES};
    use kineo::{
        Canvas, Composition, Fps, FrameIndex, KineoError, Scene, SceneCtx,
    };

    const DURATIONS: [u64; 11] = [70, 120, 150, 90, 120, 150, 180, 150, 120, 100, 200];

    #[test]
    fn sequence_durations_sum_to_the_declared_total() {
        assert_eq!(DURATIONS.iter().sum::<u64>(), AGENT_VIDEO_FRAMES);
        let comp = scenes::agent_video().unwrap();
        assert_eq!(comp.duration_frames(), AGENT_VIDEO_FRAMES);
        comp.validate().unwrap();
    }

    #[test]
    fn double_evaluation_is_bit_identical() {
        let a = scenes::agent_video().unwrap();
        let b = scenes::agent_video().unwrap();
        for frame in 0..AGENT_VIDEO_FRAMES {
            let fa = a.evaluate_frame(FrameIndex(frame)).unwrap();
            let fb = b.evaluate_frame(FrameIndex(frame)).unwrap();
            assert_eq!(fa, fb, "frame {frame}");
            assert_eq!(
                serde_json::to_string(&fa).unwrap(),
                serde_json::to_string(&fb).unwrap(),
                "frame {frame}"
            );
        }
    }

    #[test]
    fn sequences_partition_the_timeline_without_gaps_or_overlaps() {
        let comp = scenes::agent_video().unwrap();
        let mut expected_index = 0usize;
        let mut window_start = 0u64;
        for frame in 0..AGENT_VIDEO_FRAMES {
            if frame == window_start + DURATIONS[expected_index] {
                window_start += DURATIONS[expected_index];
                expected_index += 1;
            }
            let resolved = comp.timeline().resolve(FrameIndex(frame)).unwrap();
            assert_eq!(resolved.active_index, expected_index, "frame {frame}");
            assert_eq!(resolved.local_frame, frame - window_start, "frame {frame}");
        }
        assert_eq!(expected_index, DURATIONS.len() - 1);
        assert!(matches!(
            comp.timeline()
                .resolve(FrameIndex(AGENT_VIDEO_FRAMES))
                .unwrap_err(),
            KineoError::FrameOutOfRange { .. }
        ));
    }

    #[test]
    fn scenes_observe_local_frame_zero_at_their_own_start() {
        let comp = scenes::agent_video().unwrap();
        let direct: Vec<Box<dyn Scene>> = vec![
            Box::new(scenes::IntroScene),
            Box::new(scenes::AgentProfileScene),
            Box::new(scenes::VideoSurveillanceScene),
            Box::new(scenes::QuestionScene),
            Box::new(scenes::BrainScene),
            Box::new(scenes::ComparisonScene),
            Box::new(scenes::ChatScene),
            Box::new(scenes::ToolboxScene),
            Box::new(scenes::CapabilityScene),
            Box::new(scenes::FlipDemoScene),
            Box::new(scenes::RunningModeScene),
        ];

        let mut start = 0u64;
        for (i, scene) in direct.iter().enumerate() {
            let evaluated = comp.evaluate_frame(FrameIndex(start)).unwrap();
            let ctx = SceneCtx {
                local_frame: 0,
                duration_frames: DURATIONS[i],
                fps: comp.fps(),
                canvas: comp.canvas(),
            };
            assert_eq!(evaluated.state, scene.evaluate(&ctx), "sequence {i}");
            start += DURATIONS[i];
        }
    }

    #[test]
    fn duration_mismatch_is_reported_with_both_numbers() {
        struct Blank;
        impl Scene for Blank {
            fn name(&self) -> &'static str {
                "blank"
            }
            fn evaluate(&self, _ctx: &SceneCtx) -> kineo::SceneState {
                kineo::SceneState::node(self.name())
            }
        }

        let err = Composition::new(
            Fps::new(30, 1).unwrap(),
            Canvas {
                width: 1080,
                height: 1920,
            },
            1080,
            vec![(Box::new(Blank), 70), (Box::new(Blank), 120)],
        )
        .unwrap_err();
        match err {
            KineoError::DurationMismatch { declared, computed } => {
                assert_eq!(declared, 1080);
                assert_eq!(computed, 190);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
