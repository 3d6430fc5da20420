use url::Url;

/// Swap the network location of a candidate stream URL for the proxy's
/// host and port, keeping scheme, path and query intact.
pub fn substitute_host(candidate: &str, proxy_base: &str) -> Result<String, url::ParseError> {
    let mut stream_url = Url::parse(candidate)?;
    let proxy = Url::parse(proxy_base)?;
    let host = proxy.host_str().ok_or(url::ParseError::EmptyHost)?;

    stream_url.set_host(Some(host))?;
    stream_url
        .set_port(proxy.port())
        .map_err(|_| url::ParseError::InvalidPort)?;

    Ok(stream_url.into())
}
