#[cfg(test)]
mod player {
    use crate::{
        bridge::Recorder,
        player::Player,
        session::{Alias, State},
        Error,
    };

    fn player() -> (Player<Recorder>, Recorder) {
        let recorder = Recorder::new();
        (Player::new(recorder.clone(), Alias::default()), recorder)
    }

    #[test]
    fn full_sequence() {
        let (mut player, recorder) = player();

        player.play("a.mp3").unwrap();
        player.set_volume(50).unwrap();
        player.pause().unwrap();
        player.resume().unwrap();

        assert_eq!(
            recorder.commands(),
            [
                "open \"a.mp3\" alias mp3",
                "play mp3",
                "setaudio mp3 volume to 500",
                "pause mp3",
                "resume mp3",
            ]
        );
    }

    #[test]
    fn drop_closes_once() {
        let (mut player, recorder) = player();
        player.play("a.mp3").unwrap();
        drop(player);

        let commands = recorder.commands();
        assert_eq!(commands.iter().filter(|x| *x == "close mp3").count(), 1);
        assert_eq!(commands.last().unwrap(), "close mp3");
    }

    #[test]
    fn drop_without_session_sends_nothing() {
        let (player, recorder) = player();
        drop(player);

        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn explicit_close_isnt_repeated_on_drop() {
        let (mut player, recorder) = player();
        player.play("a.mp3").unwrap();
        player.close().unwrap();
        player.close().unwrap();
        drop(player);

        assert_eq!(recorder.commands(), ["open \"a.mp3\" alias mp3", "play mp3", "close mp3"]);
    }

    #[test]
    fn stop_closes_the_session() {
        let (mut player, recorder) = player();
        player.play("a.mp3").unwrap();
        player.stop().unwrap();

        assert!(player.session().is_none());
        assert!(matches!(player.pause(), Err(Error::NoSession)));
        drop(player);

        assert_eq!(
            recorder.commands(),
            ["open \"a.mp3\" alias mp3", "play mp3", "stop mp3", "close mp3"]
        );
    }

    #[test]
    fn playing_again_closes_the_previous_file() {
        let (mut player, recorder) = player();
        player.play("a.mp3").unwrap();
        player.play("b.mp3").unwrap();
        drop(player);

        assert_eq!(
            recorder.commands(),
            [
                "open \"a.mp3\" alias mp3",
                "play mp3",
                "close mp3",
                "open \"b.mp3\" alias mp3",
                "play mp3",
                "close mp3",
            ]
        );
    }

    #[test]
    fn requires_session() {
        let (mut player, recorder) = player();

        assert!(matches!(player.pause(), Err(Error::NoSession)));
        assert!(matches!(player.resume(), Err(Error::NoSession)));
        assert!(matches!(player.stop(), Err(Error::NoSession)));
        assert!(matches!(player.set_volume(10), Err(Error::NoSession)));
        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn out_of_range_volume_sends_nothing() {
        let (mut player, recorder) = player();
        player.play("a.mp3").unwrap();

        for volume in [-1, 101, 150] {
            assert!(matches!(player.set_volume(volume), Err(Error::Volume(_))));
        }

        assert_eq!(recorder.commands().len(), 2);
        assert!(player.session().unwrap().volume().is_none());
    }

    #[test]
    fn out_of_range_is_reported_before_missing_session() {
        let (mut player, recorder) = player();

        assert!(matches!(player.set_volume(150), Err(Error::Volume(_))));
        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn tracks_state() {
        let (mut player, _recorder) = player();
        player.play("song.wav").unwrap();
        assert_eq!(player.session().unwrap().state(), State::Playing);

        player.pause().unwrap();
        assert_eq!(player.session().unwrap().state(), State::Paused);

        player.set_volume(30).unwrap();
        let session = player.session().unwrap();
        assert_eq!(session.state(), State::Paused);
        assert_eq!(session.volume().unwrap().percent(), 30);

        player.resume().unwrap();
        assert_eq!(player.session().unwrap().state(), State::Playing);
    }

    #[test]
    fn custom_alias() {
        let recorder = Recorder::new();
        let mut player = Player::new(recorder.clone(), "song".parse().unwrap());
        player.play("C:\\Music\\My Song.mp3").unwrap();
        player.set_volume(100).unwrap();
        drop(player);

        assert_eq!(
            recorder.commands(),
            [
                "open \"C:\\Music\\My Song.mp3\" alias song",
                "play song",
                "setaudio song volume to 1000",
                "close song",
            ]
        );
    }

    #[test]
    fn rejects_bad_paths() {
        let (mut player, recorder) = player();

        assert!(matches!(player.play(""), Err(Error::InvalidPath(_))));
        assert!(matches!(player.play("  "), Err(Error::InvalidPath(_))));
        assert!(matches!(player.play("a\" b.mp3"), Err(Error::InvalidPath(_))));
        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn failed_open_leaves_no_session() {
        let recorder = Recorder::new().fail_on("open", 275, "Cannot find the specified file.");
        let mut player = Player::new(recorder.clone(), Alias::default());

        let error = player.play("missing.mp3").unwrap_err();
        assert!(error.to_string().contains("Cannot find the specified file."));
        assert!(player.session().is_none());
        drop(player);

        assert_eq!(recorder.commands(), ["open \"missing.mp3\" alias mp3"]);
    }

    #[test]
    fn failed_play_still_closes() {
        let recorder = Recorder::new().fail_on("play", 263, "The specified device is not open.");
        let mut player = Player::new(recorder.clone(), Alias::default());

        assert!(matches!(player.play("a.mp3"), Err(Error::Bridge(_))));
        assert_eq!(player.session().unwrap().state(), State::Opened);
        drop(player);

        assert_eq!(
            recorder.commands(),
            ["open \"a.mp3\" alias mp3", "play mp3", "close mp3"]
        );
    }

    #[test]
    fn failed_stop_still_closes() {
        let recorder = Recorder::new().fail_on("stop", 1, "nope");
        let mut player = Player::new(recorder.clone(), Alias::default());
        player.play("a.mp3").unwrap();

        assert!(player.stop().is_err());
        assert!(player.session().is_none());
        drop(player);

        assert_eq!(recorder.commands().last().unwrap(), "close mp3");
    }

    #[test]
    fn failed_close_on_drop_doesnt_panic() {
        let recorder = Recorder::new().fail_on("close", 1, "nope");
        let mut player = Player::new(recorder.clone(), Alias::default());
        player.play("a.mp3").unwrap();
        drop(player);

        assert_eq!(recorder.commands().len(), 3);
    }

    #[test]
    fn panic_still_closes_once() {
        let recorder = Recorder::new();
        let handle = recorder.clone();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let mut player = Player::new(handle, Alias::default());
            player.play("a.mp3").unwrap();
            panic!("interrupted while playing");
        }));

        assert!(result.is_err());

        let commands = recorder.commands();
        assert_eq!(commands.iter().filter(|x| *x == "close mp3").count(), 1);
        assert_eq!(commands.last().unwrap(), "close mp3");
    }

    #[test]
    fn failed_stop_and_close_reports_close() {
        let recorder = Recorder::new()
            .fail_on("stop", 1, "won't stop")
            .fail_on("close", 2, "won't close");
        let mut player = Player::new(recorder.clone(), Alias::default());
        player.play("a.mp3").unwrap();

        let error = player.stop().unwrap_err();
        assert!(error.to_string().contains("won't close"));
        assert!(player.session().is_none());
        drop(player);

        assert_eq!(
            recorder.commands(),
            ["open \"a.mp3\" alias mp3", "play mp3", "stop mp3", "close mp3"]
        );
    }
}
