//! Line-framed byte-stream transport
//!
//! One message per line in both directions. The stream is either plain TCP or
//! TLS over TCP; the control loop only sees [`Transport`]. Lines are handed
//! over as raw bytes so that text decoding is left to the protocol layer.

use crate::config::ClientConfig;
use log::{debug, info};
use native_tls::{TlsConnector, TlsStream};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::net::{Shutdown, TcpStream};

/// Longest accepted incoming line in bytes, line ending included
pub const MAX_LINE: u64 = 64 * 1024;

/// A connection that carries whole lines
pub trait Transport {
    /// Send one line; the newline is added here
    ///
    /// # Errors
    /// Returns the underlying I/O error, or `NotConnected` after `close`.
    fn send(&mut self, line: &str) -> io::Result<()>;

    /// Wait for the next non-blank line, without its line ending
    ///
    /// Returns `Ok(None)` once the peer has closed or after `close`.
    ///
    /// # Errors
    /// Returns the underlying I/O error, or `InvalidData` for a line longer
    /// than [`MAX_LINE`].
    fn recv(&mut self) -> io::Result<Option<Vec<u8>>>;

    /// Close the connection; later calls do nothing
    ///
    /// # Errors
    /// Returns the error from shutting the stream down.
    fn close(&mut self) -> io::Result<()>;
}

/// A bidirectional byte stream that can be shut down
pub trait Endpoint: Read + Write {
    /// # Errors
    /// Returns the error from shutting the stream down.
    fn shutdown(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Endpoint for TcpStream {
    fn shutdown(&mut self) -> io::Result<()> {
        match TcpStream::shutdown(self, Shutdown::Both) {
            Err(err) if err.kind() == io::ErrorKind::NotConnected => Ok(()),
            other => other,
        }
    }
}

/// Plain or encrypted TCP stream
#[derive(Debug)]
pub enum Stream {
    Plain(TcpStream),
    Tls(Box<TlsStream<TcpStream>>),
}

impl Read for Stream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Plain(s) => s.read(buf),
            Self::Tls(s) => s.read(buf),
        }
    }
}

impl Write for Stream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Plain(s) => s.write(buf),
            Self::Tls(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Plain(s) => s.flush(),
            Self::Tls(s) => s.flush(),
        }
    }
}

impl Endpoint for Stream {
    fn shutdown(&mut self) -> io::Result<()> {
        match self {
            Self::Plain(s) => Endpoint::shutdown(s),
            Self::Tls(s) => s.shutdown(),
        }
    }
}

/// Newline framing over any [`Endpoint`]
#[derive(Debug)]
pub struct LineTransport<S: Endpoint> {
    stream: BufReader<S>,
    open: bool,
}

impl<S: Endpoint> LineTransport<S> {
    pub fn new(stream: S) -> Self {
        Self {
            stream: BufReader::new(stream),
            open: true,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn get_ref(&self) -> &S {
        self.stream.get_ref()
    }
}

impl<S: Endpoint> Transport for LineTransport<S> {
    fn send(&mut self, line: &str) -> io::Result<()> {
        if !self.open {
            return Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "transport already closed",
            ));
        }

        let mut framed = String::with_capacity(line.len() + 1);
        framed.push_str(line);
        framed.push('\n');

        let writer = self.stream.get_mut();
        writer.write_all(framed.as_bytes())?;
        writer.flush()
    }

    fn recv(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut buffer = Vec::new();
        while self.open {
            buffer.clear();
            let read = Read::by_ref(&mut self.stream)
                .take(MAX_LINE)
                .read_until(b'\n', &mut buffer)?;
            if read == 0 {
                debug!("peer closed the connection");
                return Ok(None);
            }
            if buffer.last() != Some(&b'\n') && read as u64 == MAX_LINE {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("incoming line exceeds {MAX_LINE} bytes"),
                ));
            }

            let mut line = buffer.as_slice();
            while let [rest @ .., b'\r' | b'\n'] = line {
                line = rest;
            }
            if !line.trim_ascii().is_empty() {
                return Ok(Some(line.to_vec()));
            }
        }
        Ok(None)
    }

    fn close(&mut self) -> io::Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        debug!("closing connection");
        self.stream.get_mut().shutdown()
    }
}

/// Open a connection to the configured server
///
/// TLS verifies the server certificate against the hostname.
///
/// # Errors
/// Returns an I/O error if the TCP connection or the TLS handshake fails.
pub fn connect(config: &ClientConfig) -> io::Result<LineTransport<Stream>> {
    let tcp = TcpStream::connect((config.hostname.as_str(), config.port))?;

    let stream = if config.tls {
        let connector = TlsConnector::new().map_err(|e| io::Error::other(e.to_string()))?;
        let tls = connector
            .connect(&config.hostname, tcp)
            .map_err(|e| io::Error::other(format!("TLS handshake failed: {e}")))?;
        Stream::Tls(Box::new(tls))
    } else {
        Stream::Plain(tcp)
    };

    info!(
        "Connected to {}:{} using {}",
        config.hostname,
        config.port,
        if config.tls { "TLS" } else { "TCP" }
    );
    Ok(LineTransport::new(stream))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::net::TcpListener;

    /// In-memory endpoint: reads from a fixed script, records writes
    struct Loopback {
        input: Cursor<Vec<u8>>,
        output: Vec<u8>,
        shutdowns: usize,
    }

    impl Loopback {
        fn new(input: &str) -> Self {
            Self {
                input: Cursor::new(input.as_bytes().to_vec()),
                output: Vec::new(),
                shutdowns: 0,
            }
        }
    }

    impl Read for Loopback {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.input.read(buf)
        }
    }

    impl Write for Loopback {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.output.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Endpoint for Loopback {
        fn shutdown(&mut self) -> io::Result<()> {
            self.shutdowns += 1;
            Ok(())
        }
    }

    #[test]
    fn recv_splits_lines_and_skips_blanks() {
        let mut transport = LineTransport::new(Loopback::new("first\r\n\n  \nsecond\nlast"));

        assert_eq!(transport.recv().unwrap().as_deref(), Some(&b"first"[..]));
        assert_eq!(transport.recv().unwrap().as_deref(), Some(&b"second"[..]));
        assert_eq!(transport.recv().unwrap().as_deref(), Some(&b"last"[..]));
        assert_eq!(transport.recv().unwrap(), None);
    }

    #[test]
    fn recv_passes_non_utf8_bytes_through() {
        let mut endpoint = Loopback::new("");
        endpoint.input = Cursor::new(b"{\"id\":\"\xff\xfe\"}\r\nnext\n".to_vec());
        let mut transport = LineTransport::new(endpoint);

        assert_eq!(
            transport.recv().unwrap().as_deref(),
            Some(&b"{\"id\":\"\xff\xfe\"}"[..])
        );
        assert_eq!(transport.recv().unwrap().as_deref(), Some(&b"next"[..]));
    }

    #[test]
    fn recv_rejects_oversized_line() {
        let long = "x".repeat(usize::try_from(MAX_LINE).unwrap() + 10);
        let mut transport = LineTransport::new(Loopback::new(&format!("{long}\nshort\n")));

        let err = transport.recv().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn recv_accepts_line_at_the_limit() {
        let body = "y".repeat(usize::try_from(MAX_LINE).unwrap() - 1);
        let mut transport = LineTransport::new(Loopback::new(&format!("{body}\n")));

        assert_eq!(transport.recv().unwrap().map(|l| l.len()), Some(body.len()));
    }

    #[test]
    fn send_appends_newline() {
        let mut transport = LineTransport::new(Loopback::new(""));
        transport.send(r#"{"type":"hello"}"#).unwrap();
        transport.send("two").unwrap();

        assert_eq!(transport.get_ref().output, b"{\"type\":\"hello\"}\ntwo\n");
    }

    #[test]
    fn close_is_idempotent_and_stops_traffic() {
        let mut transport = LineTransport::new(Loopback::new("pending\n"));
        transport.close().unwrap();
        transport.close().unwrap();

        assert!(!transport.is_open());
        assert_eq!(transport.get_ref().shutdowns, 1);
        assert_eq!(transport.recv().unwrap(), None);
        let err = transport.send("late").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotConnected);
    }

    #[test]
    fn tcp_round_trip() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let peer = std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut transport = LineTransport::new(stream);
            let line = transport.recv().unwrap().unwrap();
            transport
                .send(&String::from_utf8(line).unwrap().to_uppercase())
                .unwrap();
            transport.close().unwrap();
        });

        let mut transport = LineTransport::new(TcpStream::connect(addr).unwrap());
        transport.send("ping").unwrap();
        assert_eq!(transport.recv().unwrap().as_deref(), Some(&b"PING"[..]));
        assert_eq!(transport.recv().unwrap(), None);
        transport.close().unwrap();

        peer.join().unwrap();
    }

    #[test]
    fn connect_refused_is_an_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = ClientConfig::new("127.0.0.1", "doe.j", false, Some(port));
        assert!(connect(&config).is_err());
    }
}
