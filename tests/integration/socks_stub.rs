//! Minimal SOCKS5 server for tests
//!
//! Accepts the no-auth method, records every CONNECT target, and relays bytes
//! to the real destination. A rejecting stub refuses every handshake.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use tokio::io::{copy_bidirectional, AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

pub struct SocksStub {
    addr: SocketAddr,
    targets: Arc<Mutex<Vec<String>>>,
    accept_loop: JoinHandle<()>,
}

impl SocksStub {
    /// Starts a relaying proxy
    pub async fn start() -> Self {
        Self::spawn(false).await
    }

    /// Starts a proxy that rejects every client at the method negotiation
    pub async fn start_rejecting() -> Self {
        Self::spawn(true).await
    }

    async fn spawn(reject: bool) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let targets = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&targets);
        let accept_loop = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let log = Arc::clone(&log);
                tokio::spawn(async move {
                    let _ = handle(stream, log, reject).await;
                });
            }
        });

        Self {
            addr,
            targets,
            accept_loop,
        }
    }

    /// Address in the `host:port` form the config expects
    pub fn address(&self) -> String {
        self.addr.to_string()
    }

    /// Every CONNECT target seen so far, as `host:port`
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

impl Drop for SocksStub {
    fn drop(&mut self) {
        self.accept_loop.abort();
    }
}

async fn handle(
    mut client: TcpStream,
    targets: Arc<Mutex<Vec<String>>>,
    reject: bool,
) -> std::io::Result<()> {
    // greeting: VER NMETHODS METHODS...
    let mut greeting = [0u8; 2];
    client.read_exact(&mut greeting).await?;
    let mut methods = vec![0u8; greeting[1] as usize];
    client.read_exact(&mut methods).await?;

    if reject || greeting[0] != 5 {
        client.write_all(&[5, 0xff]).await?;
        return Ok(());
    }
    client.write_all(&[5, 0]).await?;

    // request: VER CMD RSV ATYP DST.ADDR DST.PORT
    let mut request = [0u8; 4];
    client.read_exact(&mut request).await?;
    let host = match request[3] {
        1 => {
            let mut octets = [0u8; 4];
            client.read_exact(&mut octets).await?;
            Ipv4Addr::from(octets).to_string()
        }
        3 => {
            let len = client.read_u8().await? as usize;
            let mut name = vec![0u8; len];
            client.read_exact(&mut name).await?;
            String::from_utf8_lossy(&name).into_owned()
        }
        4 => {
            let mut octets = [0u8; 16];
            client.read_exact(&mut octets).await?;
            Ipv6Addr::from(octets).to_string()
        }
        _ => {
            client.write_all(&[5, 8, 0, 1, 0, 0, 0, 0, 0, 0]).await?;
            return Ok(());
        }
    };
    let port = client.read_u16().await?;
    targets.lock().unwrap().push(format!("{}:{}", host, port));

    match TcpStream::connect((host.as_str(), port)).await {
        Ok(mut upstream) => {
            client.write_all(&[5, 0, 0, 1, 0, 0, 0, 0, 0, 0]).await?;
            copy_bidirectional(&mut client, &mut upstream).await?;
        }
        Err(_) => {
            client.write_all(&[5, 5, 0, 1, 0, 0, 0, 0, 0, 0]).await?;
        }
    }
    Ok(())
}
