mod tests {
    use nitelite::topology::{Arm, Colour, LED_COUNT, channel_for};

    #[test]
    fn test_channel_map_is_a_bijection() {
        let mut seen = [false; LED_COUNT];
        for arm in Arm::ALL {
            for colour in Colour::ALL {
                let channel = channel_for(arm, colour);
                assert!(channel < LED_COUNT);
                assert!(!seen[channel], "channel {channel} assigned twice");
                seen[channel] = true;
            }
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn test_exact_wiring() {
        let expected = [
            (Arm::Top, [6, 7, 8, 5, 4, 9]),
            (Arm::Left, [0, 1, 2, 3, 14, 12]),
            (Arm::Right, [17, 16, 15, 13, 11, 10]),
        ];
        for (arm, channels) in expected {
            for (colour, channel) in Colour::ALL.into_iter().zip(channels) {
                assert_eq!(channel_for(arm, colour), channel);
            }
        }
    }
}
