use chaser_client::{InMemoryTransport, Transport, TurnSequencer};

const QUIET: &[u8] = b"0000000000";

/// Play one turn with the given facade method and check the wire traffic.
macro_rules! assert_sends {
    ($method:ident, $code:expr) => {{
        let (client, mut server) = InMemoryTransport::pair();
        let mut seq = TurnSequencer::new(client);
        server.send(b"@").await?;
        server.send(QUIET).await?;
        server.send(QUIET).await?;

        let mut controller = seq.controller();
        controller.get_ready().await?;
        controller.$method().await?;
        assert_eq!(controller.current_turn(), 2);

        assert_eq!(server.recv().await?, b"gr\r\n");
        assert_eq!(server.recv().await?, format!("{}\r\n", $code).into_bytes());
        assert_eq!(server.recv().await?, b"#\r\n");
    }};
}

#[tokio::test]
async fn test_walk_orders() -> anyhow::Result<()> {
    assert_sends!(walk_up, "wu");
    assert_sends!(walk_down, "wd");
    assert_sends!(walk_left, "wl");
    assert_sends!(walk_right, "wr");
    Ok(())
}

#[tokio::test]
async fn test_look_orders() -> anyhow::Result<()> {
    assert_sends!(look_up, "lu");
    assert_sends!(look_down, "ld");
    assert_sends!(look_left, "ll");
    assert_sends!(look_right, "lr");
    Ok(())
}

#[tokio::test]
async fn test_search_orders() -> anyhow::Result<()> {
    assert_sends!(search_up, "su");
    assert_sends!(search_down, "sd");
    assert_sends!(search_left, "sl");
    assert_sends!(search_right, "sr");
    Ok(())
}

#[tokio::test]
async fn test_put_orders() -> anyhow::Result<()> {
    assert_sends!(put_up, "pu");
    assert_sends!(put_down, "pd");
    assert_sends!(put_left, "pl");
    assert_sends!(put_right, "pr");
    Ok(())
}
