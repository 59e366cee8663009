mod tests {
    use nitelite::Frame;
    use nitelite::levels::{index_of, level_at, step_down};
    use nitelite::pattern::{
        DROPLET_LEVEL, DropletPattern, GlowPattern, Pattern, SnakePattern, SwellPattern,
        TwinklePattern,
    };
    use nitelite::topology::{Arm, Colour, LED_COUNT, channel_for};

    fn rng() -> fastrand::Rng {
        fastrand::Rng::with_seed(0x5eed)
    }

    #[test]
    fn test_glow_fills_mid_level_regardless_of_prior_state() {
        let mut rng = rng();
        let mut pattern = GlowPattern;
        let mut frame: Frame = [128; LED_COUNT];
        let step = pattern.step(&mut rng, &mut frame);
        assert_eq!(frame, [8; LED_COUNT]);
        assert!(step.cycle_complete);
        assert_eq!(step.pause.as_millis(), 0);
    }

    #[test]
    fn test_twinkle_decay_steps_down_the_ladder() {
        let mut rng = rng();
        let mut pattern = TwinklePattern::new();
        let mut frame: Frame = [0; LED_COUNT];

        // Burn the entry tick so the next step is decay only.
        pattern.step(&mut rng, &mut frame);
        frame = [
            128, 64, 32, 16, 8, 4, 2, 1, 0, 128, 64, 32, 16, 8, 4, 2, 1, 0,
        ];
        let before = frame;
        pattern.step(&mut rng, &mut frame);

        for led in 0..LED_COUNT {
            assert_eq!(frame[led], step_down(before[led]));
        }
    }

    #[test]
    fn test_twinkle_ignites_only_on_the_ten_tick_cadence() {
        let mut rng = rng();
        let mut pattern = TwinklePattern::new();
        let mut frame: Frame = [0; LED_COUNT];
        let mut ignition_ticks = Vec::new();

        for tick in 0..1000u32 {
            let before = frame;
            pattern.step(&mut rng, &mut frame);
            // A brightness increase can only come from the re-ignite sub-step.
            if (0..LED_COUNT).any(|led| frame[led] > before[led]) {
                ignition_ticks.push(tick);
            }
            for value in frame {
                assert!(index_of(value).is_some(), "{value} is not a ladder level");
            }
        }

        assert!(ignition_ticks.len() > 50);
        assert!(ignition_ticks.iter().all(|tick| tick % 10 == 0));
    }

    #[test]
    fn test_swell_visits_the_full_ramp_in_order() {
        let mut rng = rng();
        let mut pattern = SwellPattern::new();
        let mut frame: Frame = [0; LED_COUNT];
        let mut ramp = Vec::new();

        for push in 0..17 {
            let step = pattern.step(&mut rng, &mut frame);
            assert!(frame.iter().all(|&value| value == frame[0]));
            ramp.push(frame[0]);
            assert_eq!(step.cycle_complete, push == 16);
            assert_eq!(step.pause.as_millis(), 100);
        }

        let expected: Vec<u8> = (0..=8).chain((0..8).rev()).map(level_at).collect();
        assert_eq!(ramp, expected);
    }

    #[test]
    fn test_swell_repeats_cleanly() {
        let mut rng = rng();
        let mut pattern = SwellPattern::new();
        let mut frame: Frame = [0; LED_COUNT];
        for _ in 0..17 {
            pattern.step(&mut rng, &mut frame);
        }
        // Second cycle starts back at the bottom of the ladder.
        pattern.step(&mut rng, &mut frame);
        assert_eq!(frame, [0; LED_COUNT]);
    }

    #[test]
    fn test_droplet_sweeps_out_and_back() {
        let expected_sweep = [
            Colour::Red,
            Colour::Orange,
            Colour::Yellow,
            Colour::Green,
            Colour::Blue,
            Colour::White,
            Colour::Blue,
            Colour::Green,
            Colour::Yellow,
            Colour::Orange,
        ];
        let mut rng = rng();
        let mut pattern = DropletPattern::new();
        let mut frame: Frame = [0; LED_COUNT];

        for (push, colour) in expected_sweep.into_iter().enumerate() {
            let step = pattern.step(&mut rng, &mut frame);

            // The pushed frame shows the colour's channel on all three arms
            // and nothing else.
            for led in 0..LED_COUNT {
                let lit = Arm::ALL.iter().any(|&arm| channel_for(arm, colour) == led);
                assert_eq!(frame[led], if lit { DROPLET_LEVEL } else { 0 });
            }
            assert_eq!(step.cycle_complete, push == expected_sweep.len() - 1);

            // Once the frame has reached the panel the band is cleared.
            pattern.settle(&mut frame);
            assert_eq!(frame, [0; LED_COUNT]);
        }
    }

    #[test]
    fn test_snake_lights_each_arm_in_turn() {
        let mut rng = rng();
        let mut pattern = SnakePattern::new();
        let mut frame: Frame = [0; LED_COUNT];
        let mut pushes = 0;

        for arm in Arm::ALL {
            // Outward push: the five inner colours, brighter towards the tip.
            let step = pattern.step(&mut rng, &mut frame);
            pushes += 1;
            for index in 0..5 {
                assert_eq!(frame[channel_for(arm, Colour::ALL[index])], level_at(index + 1));
            }
            assert_eq!(frame[channel_for(arm, Colour::White)], 0);
            assert!(!step.cycle_complete);
            pattern.settle(&mut frame);

            // Return push: the tip joins at the same indexing scheme.
            let step = pattern.step(&mut rng, &mut frame);
            pushes += 1;
            assert_eq!(frame[channel_for(arm, Colour::White)], level_at(6));
            for index in 0..5 {
                assert_eq!(frame[channel_for(arm, Colour::ALL[index])], level_at(index + 1));
            }
            assert_eq!(step.cycle_complete, pushes == 6);

            // The arm goes dark once its second frame has been written.
            pattern.settle(&mut frame);
            for colour in Colour::ALL {
                assert_eq!(frame[channel_for(arm, colour)], 0);
            }
        }

        assert_eq!(pushes, 6);
        assert_eq!(frame, [0; LED_COUNT]);
    }
}
