#![allow(dead_code)]
use domain_insight_infrastructure::dns::forwarding::MessageBuilder;
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// Builds the answer for one parsed query; `true` marks a TCP exchange.
pub type Responder = Arc<dyn Fn(&Message, bool) -> Message + Send + Sync>;

/// Mock DNS server answering over UDP and TCP on the same local port.
///
/// Useful for tests that must not depend on real DNS.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(responder: Responder) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_count = udp_queries.clone();
        let tcp_count = tcp_queries.clone();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            if let Some(bytes) = answer(&responder, &buf[..len], false) {
                                let _ = socket.send_to(&bytes, peer).await;
                            }
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((mut stream, _)) = result {
                            tcp_count.fetch_add(1, Ordering::SeqCst);
                            let responder = responder.clone();
                            tokio::spawn(async move {
                                let Ok(len) = stream.read_u16().await else { return };
                                let mut query = vec![0u8; len as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                if let Some(bytes) = answer(&responder, &query, true) {
                                    let mut framed = (bytes.len() as u16).to_be_bytes().to_vec();
                                    framed.extend_from_slice(&bytes);
                                    let _ = stream.write_all(&framed).await;
                                }
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn answer(responder: &Responder, query: &[u8], tcp: bool) -> Option<Vec<u8>> {
    let query = Message::from_vec(query).ok()?;
    let response = responder(&query, tcp);
    MessageBuilder::serialize_message(&response).ok()
}

/// Bound UDP socket that never answers, for timeout tests
pub async fn silent_server() -> Result<(UdpSocket, SocketAddr), std::io::Error> {
    let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let addr = socket.local_addr()?;
    Ok((socket, addr))
}
